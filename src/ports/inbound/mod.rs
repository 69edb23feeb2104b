/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the
/// console loop) use to interact with the application core.
pub mod question_answering_port;

pub use question_answering_port::QuestionAnsweringPort;
