pub mod hypervisor;
pub mod prefix;
