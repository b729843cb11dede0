// Tue Oct 13 2026 - Alex

use crate::output::naming::NameSanitizer;
use crate::structure::{EmissionPlan, Equ, LayoutSynthesizer, PlanEntry, StructureRegistry};
use log::debug;
use std::fmt::Write;

/// Renders synthesized layouts as Go declarations.
pub struct Emitter {
    sanitizer: NameSanitizer,
    package: Option<String>,
}

impl Emitter {
    pub fn new(sanitizer: NameSanitizer) -> Self {
        Self {
            sanitizer,
            package: None,
        }
    }

    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    /// Plans for every named structure, in registry order.
    pub fn plans(registry: &StructureRegistry) -> Vec<EmissionPlan> {
        registry
            .structures()
            .filter(|d| d.is_named())
            .map(LayoutSynthesizer::synthesize)
            .collect()
    }

    pub fn render(&self, registry: &StructureRegistry) -> String {
        let plans = Self::plans(registry);
        let mut out = String::new();

        if let Some(package) = &self.package {
            let _ = writeln!(out, "package {}\n", package);
            if plans.iter().any(EmissionPlan::uses_pointer) {
                out.push_str("import \"unsafe\"\n\n");
            }
        }

        for plan in &plans {
            out.push_str(&self.render_plan(plan));
        }
        out.push_str(&self.render_constants(registry.globals()));
        out
    }

    pub fn render_plan(&self, plan: &EmissionPlan) -> String {
        let name = self.sanitizer.sanitize(&plan.name);
        let mut out = String::new();
        if name.is_empty() {
            return out;
        }
        debug!("Emitting {} as {} ({} entries)", plan.name, name, plan.entries.len());

        let _ = writeln!(out, "type {} struct {{", name);
        for entry in &plan.entries {
            self.render_entry(&mut out, entry);
        }
        let _ = writeln!(out, "}}\nconst {}Size = {}\n", name, plan.total_size);
        out.push_str(&self.render_constants(&plan.equs));
        out
    }

    fn render_entry(&self, out: &mut String, entry: &PlanEntry) {
        let _ = match entry {
            PlanEntry::Filler { offset, size } => writeln!(
                out,
                "  _ [{}]byte // offset 0x{:04x} ({}), filler size {}",
                size, offset, offset, size
            ),
            PlanEntry::Field { member, field_type } => writeln!(
                out,
                "  {} {} // offset 0x{:04x} ({}) type {}, size/count: {}/{}",
                self.field_name(&member.name),
                field_type,
                member.offset,
                member.offset,
                member.asm_type,
                member.size,
                member.dup
            ),
            PlanEntry::Overlap { member } => writeln!(
                out,
                " // item {} of type:{} size:{} at offset {} with count {} skipped because origin overlaps previous member.",
                self.field_name(&member.name),
                member.asm_type,
                member.size,
                member.offset,
                member.dup
            ),
            PlanEntry::ZeroCount { member } => writeln!(
                out,
                " // item {} of type:{} size:{} at offset {} with 0 count skipped",
                self.field_name(&member.name),
                member.asm_type,
                member.size,
                member.offset
            ),
        };
    }

    fn field_name(&self, raw: &str) -> String {
        let name = self.sanitizer.sanitize(raw);
        if name.is_empty() {
            "_".to_string()
        } else {
            name
        }
    }

    /// A `const (...)` block of the named entries, or nothing.
    pub fn render_constants(&self, equs: &[Equ]) -> String {
        let lines: Vec<String> = equs
            .iter()
            .filter(|e| !e.name.is_empty())
            .map(|e| (self.sanitizer.sanitize(&e.name), e.value))
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| format!(" {} = {}\n", name, value))
            .collect();

        if lines.is_empty() {
            return String::new();
        }
        format!("const (\n{})\n", lines.concat())
    }
}
