//! Identifier and field names the generated header refers to

use serde::{Deserialize, Serialize};

use crate::catalog::check_identifier;
use crate::error::{CatalogError, NameIssue};

/// Names shared between the generated header and the hand-written parser.
///
/// Defaults match seephit's `parse_error.h` and `seephit.h`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Schema {
    /// Namespace the header is included into
    pub namespace: String,
    pub include_guard: String,
    /// Ordinal enum
    pub enum_name: String,
    /// Prefix of every enumerator
    pub ordinal_prefix: String,
    /// Sentinel kind and marker name
    pub sentinel: String,
    /// Ordinal -> marker template
    pub mapping: String,
    pub report_macro: String,
    /// Defining this macro turns reporting off
    pub debug_macro: String,

    /// Parser's warning list
    pub warnings_field: String,
    pub kind_field: String,
    pub row_field: String,
    pub col_field: String,

    pub error_row_field: String,
    pub error_col_field: String,
    pub error_kind_field: String,

    pub warning_template: String,
    pub error_template: String,
    pub if_template: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            namespace: "spt".to_string(),
            include_guard: "SEEPHIT_PARSE_ERROR_GENERATED_H".to_string(),
            enum_name: "Messages".to_string(),
            ordinal_prefix: "Error_".to_string(),
            sentinel: "None".to_string(),
            mapping: "MsgToType".to_string(),
            report_macro: "REPORT_ERRORS".to_string(),
            debug_macro: "SPT_DEBUG".to_string(),
            warnings_field: "m_arrWarns".to_string(),
            kind_field: "m".to_string(),
            row_field: "row".to_string(),
            col_field: "col".to_string(),
            error_row_field: "m_iErrRow".to_string(),
            error_col_field: "m_iErrCol".to_string(),
            error_kind_field: "m_arrErrs".to_string(),
            warning_template: "Warning".to_string(),
            error_template: "Error".to_string(),
            if_template: "IF".to_string(),
        }
    }
}

impl Schema {
    /// Identifiers the header declares or uses at namespace scope, which a
    /// marker type must not shadow.
    pub fn reserved_names(&self) -> [(&'static str, &str); 10] {
        [
            ("namespace", self.namespace.as_str()),
            ("include_guard", self.include_guard.as_str()),
            ("enum_name", self.enum_name.as_str()),
            ("sentinel", self.sentinel.as_str()),
            ("mapping", self.mapping.as_str()),
            ("report_macro", self.report_macro.as_str()),
            ("debug_macro", self.debug_macro.as_str()),
            ("warning_template", self.warning_template.as_str()),
            ("error_template", self.error_template.as_str()),
            ("if_template", self.if_template.as_str()),
        ]
    }

    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("warnings_field", self.warnings_field.as_str()),
            ("kind_field", self.kind_field.as_str()),
            ("row_field", self.row_field.as_str()),
            ("col_field", self.col_field.as_str()),
            ("error_row_field", self.error_row_field.as_str()),
            ("error_col_field", self.error_col_field.as_str()),
        ]
    }

    /// Check every configured name is a usable identifier.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let all = self
            .reserved_names()
            .into_iter()
            .chain(self.fields())
            .chain([("error_kind_field", self.error_kind_field.as_str())]);

        for (field, value) in all {
            check_identifier(value).map_err(|reason| CatalogError::InvalidSchema {
                field,
                value: value.to_string(),
                reason,
            })?;
        }

        // The prefix only has to yield identifiers once a kind name is appended.
        // An empty prefix would put enumerators and marker types on the same name.
        let prefix_check = if self.ordinal_prefix.is_empty() {
            Err(NameIssue::Empty)
        } else {
            check_identifier(&format!("{}x", self.ordinal_prefix))
        };
        prefix_check.map_err(|reason| CatalogError::InvalidSchema {
            field: "ordinal_prefix",
            value: self.ordinal_prefix.clone(),
            reason,
        })?;

        Ok(())
    }

    /// `ns::name`
    pub(super) fn qualify(&self, name: &str) -> String {
        format!("{}::{}", self.namespace, name)
    }

    /// Enumerator for a marker name, e.g. `Error_Missing_open_bracket`
    pub(super) fn enumerator(&self, marker: &str) -> String {
        format!("{}{}", self.ordinal_prefix, marker)
    }
}
