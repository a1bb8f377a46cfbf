pub mod deadline;
pub mod system_lookup;
pub mod udp_lookup;

pub use deadline::DeadlineTxtLookup;
pub use system_lookup::SystemTxtLookup;
pub use udp_lookup::UdpTxtLookup;
