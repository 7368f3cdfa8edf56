//! Component registry - static metadata for every motherboard component

use crate::error::BoardError;
use std::collections::HashSet;

/// Display metadata for one hardware component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub image_ref: &'static str,
    pub description: &'static str,
}

static RECORDS: [ComponentRecord; 6] = [
    ComponentRecord {
        id: "cpu",
        title: "CPU - Central Processing Unit",
        image_ref: "images/CPU-removebg-preview.png",
        description: "The CPU is the brain of the computer. It performs most of the processing inside a computer. It interprets and executes most of the commands from the computer's hardware and software. The CPU is responsible for running the operating system and all applications, performing calculations, and managing data flow between all parts of the computer.",
    },
    ComponentRecord {
        id: "ram",
        title: "RAM - Random Access Memory",
        image_ref: "images/RAM-removebg-preview.png",
        description: "RAM is the computer's short-term memory. It temporarily stores data that the CPU needs to access quickly. Unlike storage drives, RAM is volatile, meaning it loses its contents when the computer is turned off. More RAM allows your computer to run more applications simultaneously and improves overall system performance.",
    },
    ComponentRecord {
        id: "rom",
        title: "ROM - Read-Only Memory",
        image_ref: "images/ROM-removebg-preview.png",
        description: "ROM is a type of non-volatile memory that stores permanent or semi-permanent data. In computers, ROM typically contains the BIOS (Basic Input/Output System) firmware that initializes hardware during the boot process. Unlike RAM, the data in ROM cannot be easily modified or erased.",
    },
    ComponentRecord {
        id: "cmos",
        title: "CMOS - Complementary Metal-Oxide-Semiconductor",
        image_ref: "images/CMOS-removebg-preview.png",
        description: "CMOS is a small amount of memory on the motherboard that stores BIOS settings and system configuration information. It's powered by a small battery when the computer is turned off, allowing it to maintain settings like the system time, boot order, and hardware configuration. The CMOS battery typically lasts for several years.",
    },
    ComponentRecord {
        id: "storage",
        title: "Storage Drive",
        image_ref: "images/storage_drive-removebg-preview.png",
        description: "Storage drives provide long-term data storage for the operating system, applications, and user files. Unlike RAM, storage is non-volatile and retains data when the computer is turned off. Modern storage drives include SSDs (Solid State Drives) which are faster and more durable than traditional HDDs (Hard Disk Drives).",
    },
    ComponentRecord {
        id: "power",
        title: "Power Unit",
        image_ref: "images/power_unit-removebg-preview.png",
        description: "The Power Supply Unit (PSU) converts alternating current (AC) power from the wall outlet into direct current (DC) power that computer components can use. It provides power to all motherboard components, drives, and peripherals. The PSU must supply stable, clean power at the correct voltages to ensure reliable system operation.",
    },
];

/// Read-only lookup table keyed by component id
#[derive(Debug, Clone)]
pub struct Registry {
    records: &'static [ComponentRecord],
}

impl Registry {
    /// The six built-in components
    pub fn builtin() -> Result<Self, BoardError> {
        Self::from_records(&RECORDS)
    }

    pub fn from_records(records: &'static [ComponentRecord]) -> Result<Self, BoardError> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.id) {
                return Err(BoardError::DuplicateComponent(record.id.to_string()));
            }
        }
        Ok(Self { records })
    }

    /// Find a record by id. Absence is not an error for callers.
    pub fn lookup(&self, id: &str) -> Option<&'static ComponentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Like `lookup`, but reports a miss as an error
    pub fn require(&self, id: &str) -> Result<&'static ComponentRecord, BoardError> {
        self.lookup(id)
            .ok_or_else(|| BoardError::UnknownComponent(id.to_string()))
    }

    /// Records in display order
    pub fn records(&self) -> impl Iterator<Item = &'static ComponentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 6] = ["cpu", "ram", "rom", "cmos", "storage", "power"];

    #[test]
    fn test_every_builtin_record_is_complete() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), 6);
        for id in IDS {
            let record = registry.lookup(id).expect("registered id");
            assert_eq!(record.id, id);
            assert!(!record.title.is_empty());
            assert!(!record.image_ref.is_empty());
            assert!(!record.description.is_empty());
        }
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.lookup("nonexistent").is_none());
        assert_eq!(
            registry.require("nonexistent"),
            Err(BoardError::UnknownComponent("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_cpu_title() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry.lookup("cpu").map(|r| r.title),
            Some("CPU - Central Processing Unit")
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        static DUPES: [ComponentRecord; 2] = [
            ComponentRecord {
                id: "cpu",
                title: "a",
                image_ref: "a.png",
                description: "a",
            },
            ComponentRecord {
                id: "cpu",
                title: "b",
                image_ref: "b.png",
                description: "b",
            },
        ];
        assert_eq!(
            Registry::from_records(&DUPES).unwrap_err(),
            BoardError::DuplicateComponent("cpu".to_string())
        );
    }
}
