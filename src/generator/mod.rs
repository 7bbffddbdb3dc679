//! Scaffold generation
//!
//! Turns a [`Catalog`] and a [`SlotBudget`] into the C++ header the seephit
//! parser includes to report diagnostics at compile time. The header has five
//! sections, always in this order:
//!
//! 1. the ordinal enum (sentinel first, then catalog order)
//! 2. one forward-declared marker type per ordinal
//! 3. the ordinal -> marker template specializations
//! 4. N guarded dispatch slots, one trial per kind in each
//! 5. the report macro that expands the slots and the terminal error check
//!
//! The slots are unrolled here rather than by the preprocessor, so the header
//! contains no helper macro beyond the report macro itself.

mod schema;

pub use schema::Schema;

use std::collections::HashSet;

use crate::catalog::{check_identifier, Catalog, MarkerType, SlotBudget};
use crate::error::{CatalogError, NameIssue};

/// Validate `kinds` and emit a header with the default schema.
pub fn generate<S: AsRef<str>>(kinds: &[S], slots: usize) -> Result<ScaffoldArtifact, CatalogError> {
    let catalog = Catalog::new(kinds.iter().map(|k| k.as_ref().to_string()))?;
    let budget = SlotBudget::new(slots)?;
    Generator::default().generate(&catalog, budget)
}

/// A section of the generated header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ordinals,
    Markers,
    Mapping,
    Dispatch,
    /// The report macro; embeds the dispatch section
    Report,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Ordinals,
        Section::Markers,
        Section::Mapping,
        Section::Dispatch,
        Section::Report,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// The generated header text, plus each section on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldArtifact {
    text: String,
    sections: [String; 5],
    slots: usize,
    trials: usize,
}

impl ScaffoldArtifact {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn section(&self, section: Section) -> &str {
        &self.sections[section.index()]
    }

    /// Number of guarded dispatch slots
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// Number of trial expressions in each slot
    pub fn trial_count(&self) -> usize {
        self.trials
    }
}

impl std::fmt::Display for ScaffoldArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Emits scaffold headers for one schema
#[derive(Debug, Clone, Default)]
pub struct Generator {
    schema: Schema,
}

impl Generator {
    pub fn new(schema: Schema) -> Result<Self, CatalogError> {
        schema.validate()?;
        Ok(Self { schema })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Emit the header. Nothing is produced unless every name checks out.
    pub fn generate(
        &self,
        catalog: &Catalog,
        budget: SlotBudget,
    ) -> Result<ScaffoldArtifact, CatalogError> {
        self.check_catalog(catalog)?;

        let sections = [
            self.ordinal_section(catalog),
            self.marker_section(catalog),
            self.mapping_section(catalog),
            self.dispatch_section(catalog, budget),
            String::new(),
        ];
        let report = self.report_section(&sections[Section::Dispatch.index()]);
        let [ordinals, markers, mapping, dispatch, _] = sections;

        let guard = &self.schema.include_guard;
        let mut text = format!(
            "// Generated by sptgen from {} and {}. Do not edit.\n\n",
            counted(catalog.len(), "error kind"),
            counted(budget.get(), "warning slot")
        );
        text.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
        for section in [&ordinals, &markers, &mapping, &report] {
            text.push_str(section);
            text.push('\n');
        }
        text.push_str("#endif\n");

        Ok(ScaffoldArtifact {
            text,
            sections: [ordinals, markers, mapping, dispatch, report],
            slots: budget.get(),
            trials: catalog.len(),
        })
    }

    /// Kinds must not shadow what the schema or the enum declares, and must
    /// still be identifiers once prefixed.
    ///
    /// Enumerators and marker types share the namespace scope, and an
    /// enumerator hides a struct of the same name.
    fn check_catalog(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        let reserved = self.schema.reserved_names();
        let enumerators: HashSet<String> = catalog
            .entries()
            .map(|(_, marker)| self.schema.enumerator(self.marker_name(marker)))
            .collect();

        for (position, kind) in catalog.kinds().iter().enumerate() {
            let name = kind.name();
            let enumerator = self.schema.enumerator(name);
            let invalid = |reason| CatalogError::InvalidName {
                name: name.to_string(),
                position,
                reason,
            };
            let clashes = enumerators.contains(name)
                || reserved
                    .iter()
                    .any(|(_, used)| *used == name || *used == enumerator);
            if clashes {
                return Err(invalid(NameIssue::SchemaClash));
            }
            check_identifier(&enumerator).map_err(invalid)?;
        }
        Ok(())
    }

    fn marker_name<'a>(&'a self, marker: MarkerType<'a>) -> &'a str {
        marker.name(&self.schema.sentinel)
    }

    fn ordinal_section(&self, catalog: &Catalog) -> String {
        let enumerators: Vec<String> = catalog
            .entries()
            .map(|(_, marker)| self.schema.enumerator(self.marker_name(marker)))
            .collect();
        format!(
            "enum {}\n{{\n  {}\n}};\n",
            self.schema.enum_name,
            enumerators.join(",\n  ")
        )
    }

    fn marker_section(&self, catalog: &Catalog) -> String {
        catalog
            .entries()
            .map(|(_, marker)| format!("struct {};\n", self.marker_name(marker)))
            .collect()
    }

    fn mapping_section(&self, catalog: &Catalog) -> String {
        let s = &self.schema;
        let mut out = format!(
            "template<{} m> struct {}{{}};\n\n",
            s.enum_name, s.mapping
        );
        for (_, marker) in catalog.entries() {
            let name = self.marker_name(marker);
            out.push_str(&format!(
                "template<> struct {}<{}>{{using type = {};}};\n",
                s.mapping,
                s.enumerator(name),
                name
            ));
        }
        out
    }

    /// One guarded block per slot; every line carries a macro continuation.
    fn dispatch_section(&self, catalog: &Catalog, budget: SlotBudget) -> String {
        let s = &self.schema;
        let resolved = format!("{}<w.{}>::type", s.qualify(&s.mapping), s.kind_field);

        let mut out = String::new();
        for slot in budget.slots() {
            out.push_str(&format!("if ({} < n) \\\n{{ \\\n", slot));
            if !catalog.is_empty() {
                out.push_str(&format!(
                    "  constexpr auto w = parser.{}[{}]; \\\n",
                    s.warnings_field, slot
                ));
            }
            for (_, kind) in catalog.ordered_kinds() {
                out.push_str(&format!(
                    "  {}<w.{} == {}, {}<w.{}, w.{}, {}>> {{}}; \\\n",
                    s.qualify(&s.if_template),
                    s.kind_field,
                    s.qualify(&s.enumerator(kind.name())),
                    s.qualify(&s.warning_template),
                    s.row_field,
                    s.col_field,
                    resolved
                ));
            }
            out.push_str("} \\\n");
        }
        out
    }

    fn report_section(&self, dispatch: &str) -> String {
        let s = &self.schema;
        let mut out = format!("#ifndef {}\n\n", s.debug_macro);
        out.push_str(&format!("#define {}(parser) \\\n", s.report_macro));
        out.push_str(&format!(
            "constexpr int n = parser.{}.size(); \\\n",
            s.warnings_field
        ));
        out.push_str(dispatch);
        out.push_str(&format!(
            "constexpr bool hasErr = parser.{row} >= 0 && parser.{col} >= 0; \\\n",
            row = s.error_row_field,
            col = s.error_col_field
        ));
        out.push_str(&format!(
            "{}<hasErr, {}<parser.{}, parser.{}, {}<parser.{}>::type>> {{}};\n",
            s.qualify(&s.if_template),
            s.qualify(&s.error_template),
            s.error_row_field,
            s.error_col_field,
            s.qualify(&s.mapping),
            s.error_kind_field
        ));
        out.push_str(&format!(
            "\n#else\n\n#define {}(parser)\n\n#endif\n",
            s.report_macro
        ));
        out
    }
}

/// `"1 error kind"`, `"2 error kinds"`
pub(crate) fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests;
