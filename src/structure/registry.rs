// Tue Oct 13 2026 - Alex

use crate::structure::dsect::{DsectModel, Equ, Member};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstantScoping {
    /// Classify a constant when it arrives: local only if its structure is
    /// already known at that point, global otherwise.
    #[default]
    Streaming,
    /// Classify every constant once the whole stream has been read.
    Deferred,
}

/// Structures keyed by ESDID in first-seen order, plus global constants.
#[derive(Debug, Default)]
pub struct StructureRegistry {
    structs: IndexMap<u32, DsectModel>,
    globals: Vec<Equ>,
    pending: Vec<Equ>,
    scoping: ConstantScoping,
    unnamed: usize,
}

impl StructureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoping(scoping: ConstantScoping) -> Self {
        Self {
            scoping,
            ..Self::default()
        }
    }

    pub fn scoping(&self) -> ConstantScoping {
        self.scoping
    }

    pub fn contains(&self, esdid: u32) -> bool {
        self.structs.contains_key(&esdid)
    }

    pub fn get(&self, esdid: u32) -> Option<&DsectModel> {
        self.structs.get(&esdid)
    }

    pub fn entry(&mut self, esdid: u32) -> &mut DsectModel {
        self.structs.entry(esdid).or_insert_with(|| DsectModel::new(esdid))
    }

    /// Section definition from the external symbol dictionary. A missing
    /// name gets a placeholder numbered per registry.
    pub fn define_section(&mut self, esdid: u32, name: Option<String>, total_size: u32) -> &DsectModel {
        let name = match name {
            Some(name) => name,
            None => {
                let placeholder = format!("_unname_{}", self.unnamed);
                self.unnamed += 1;
                placeholder
            }
        };
        let dsect = self.entry(esdid);
        dsect.set_name(name);
        dsect.set_total_size(total_size);
        dsect
    }

    pub fn set_name(&mut self, esdid: u32, name: impl Into<String>) {
        self.entry(esdid).set_name(name);
    }

    pub fn add_member(&mut self, esdid: u32, member: Member) {
        self.entry(esdid).add_member(member);
    }

    pub fn add_constant(&mut self, esdid: u32, name: impl Into<String>, value: i32) {
        let equ = Equ::new(Some(esdid), name, value);
        match self.scoping {
            ConstantScoping::Streaming => self.place_constant(equ),
            ConstantScoping::Deferred => self.pending.push(equ),
        }
    }

    fn place_constant(&mut self, mut equ: Equ) {
        match equ.esdid.and_then(|id| self.structs.get_mut(&id)) {
            Some(dsect) => dsect.add_equ(equ),
            None => {
                debug!("Constant {} has no known structure, keeping it global", equ.name);
                equ.esdid = None;
                self.globals.push(equ);
            }
        }
    }

    /// Ends accumulation. Deferred constants are placed here.
    pub fn finish(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for equ in pending {
            self.place_constant(equ);
        }
    }

    pub fn structures(&self) -> impl Iterator<Item = &DsectModel> {
        self.structs.values()
    }

    pub fn globals(&self) -> &[Equ] {
        &self.globals
    }

    pub fn len(&self) -> usize {
        self.structs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}
