// Tue Oct 13 2026 - Alex

use crate::structure::dsect::{DsectModel, Equ, Member};
use crate::structure::type_info::FieldType;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Filler { offset: u32, size: u32 },
    Field { member: Member, field_type: FieldType },
    /// Starts inside bytes already claimed by an earlier member.
    Overlap { member: Member },
    /// Zero duplication factor on a member that is not last.
    ZeroCount { member: Member },
}

impl PlanEntry {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Overlap { .. } | Self::ZeroCount { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionPlan {
    pub esdid: u32,
    pub name: String,
    pub total_size: u32,
    pub entries: Vec<PlanEntry>,
    /// Bytes consumed by fillers and emitted members.
    pub cursor: u32,
    pub equs: Vec<Equ>,
}

impl EmissionPlan {
    pub fn fields(&self) -> impl Iterator<Item = (&Member, &FieldType)> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Field { member, field_type } => Some((member, field_type)),
            _ => None,
        })
    }

    pub fn fillers(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Filler { offset, size } => Some((*offset, *size)),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_skipped())
    }

    pub fn uses_pointer(&self) -> bool {
        self.fields().any(|(_, t)| t.element.is_pointer())
    }
}

pub struct LayoutSynthesizer;

impl LayoutSynthesizer {
    pub fn synthesize(dsect: &DsectModel) -> EmissionPlan {
        let members = Self::ordered_members(&dsect.members);

        let mut entries = Vec::with_capacity(members.len() + 4);
        let mut cursor = 0u32;
        let last = members.len().saturating_sub(1);

        for (i, member) in members.into_iter().enumerate() {
            if member.offset < cursor {
                debug!("{}: {} overlaps previous member (cursor {})", dsect.name, member.name, cursor);
                entries.push(PlanEntry::Overlap { member });
                continue;
            }
            if member.offset > cursor {
                let size = member.offset - cursor;
                entries.push(PlanEntry::Filler { offset: cursor, size });
                cursor = member.offset;
            }
            if member.dup == 0 && i != last {
                debug!("{}: {} has zero count and is not last", dsect.name, member.name);
                entries.push(PlanEntry::ZeroCount { member });
                continue;
            }

            let field_type = FieldType::infer(member.offset, member.size, member.dup, &member.asm_type);
            cursor = cursor.saturating_add(member.extent());
            entries.push(PlanEntry::Field { member, field_type });
        }

        EmissionPlan {
            esdid: dsect.esdid,
            name: dsect.name.clone(),
            total_size: dsect.total_size,
            entries,
            cursor,
            equs: dsect.equs.iter().filter(|e| !e.name.is_empty()).cloned().collect(),
        }
    }

    /// Stable sort by offset, dropping exact repeats of a member already
    /// kept at the same offset.
    fn ordered_members(members: &[Member]) -> Vec<Member> {
        let mut sorted = members.to_vec();
        sorted.sort_by_key(|m| m.offset);

        let mut kept: Vec<Member> = Vec::with_capacity(sorted.len());
        for member in sorted {
            let repeated = kept
                .iter()
                .rev()
                .take_while(|k| k.offset == member.offset)
                .any(|k| *k == member);
            if !repeated {
                kept.push(member);
            }
        }
        kept
    }
}
