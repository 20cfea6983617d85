//! # Hypervisor Prefixes
//!
//! The fixed table of prefixes offered by the interactive menu. Menu numbers
//! are 1-based and follow the table order.

use crate::network::prefix::Prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hypervisor {
    pub name: &'static str,
    pub prefix: Prefix,
    pub description: &'static str,
}

const BUILTIN: [Hypervisor; 5] = [
    Hypervisor {
        name: "Xen",
        prefix: Prefix::new(0x00, 0x16, 0x3e),
        description: "Xen virtual machine",
    },
    Hypervisor {
        name: "VMware",
        prefix: Prefix::new(0x00, 0x50, 0x56),
        description: "VMware virtual machine",
    },
    Hypervisor {
        name: "Hyper-V",
        prefix: Prefix::new(0x00, 0x15, 0x5d),
        description: "Microsoft Hyper-V virtual machine",
    },
    Hypervisor {
        name: "VirtualBox",
        prefix: Prefix::new(0x08, 0x00, 0x27),
        description: "Oracle VirtualBox virtual machine",
    },
    Hypervisor {
        name: "KVM/QEMU",
        prefix: Prefix::new(0x52, 0x54, 0x00),
        description: "KVM/QEMU virtual machine",
    },
];

/// Read-only lookup table, built once and passed around by reference.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: Vec<Hypervisor>,
}

impl PrefixTable {
    pub fn new(entries: Vec<Hypervisor>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hypervisor> {
        self.entries.iter()
    }

    /// Looks up a 1-based menu number. `0` and anything past the end is `None`.
    pub fn select(&self, number: usize) -> Option<&Hypervisor> {
        number.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::new(BUILTIN.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_order() {
        let table = PrefixTable::default();
        let names: Vec<&str> = table.iter().map(|h| h.name).collect();

        assert_eq!(names, ["Xen", "VMware", "Hyper-V", "VirtualBox", "KVM/QEMU"]);
    }

    #[test]
    fn select_is_one_based() {
        let table = PrefixTable::default();

        assert_eq!(table.select(1).map(|h| h.prefix.to_string()).as_deref(), Some("00:16:3e"));
        assert_eq!(table.select(5).map(|h| h.prefix.to_string()).as_deref(), Some("52:54:00"));
        assert!(table.select(0).is_none());
        assert!(table.select(6).is_none());
    }
}
