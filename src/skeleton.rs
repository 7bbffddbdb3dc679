//! Test-harness skeleton for a template source file

/// A C++ program that parses `source_path` at compile time and dumps the tree.
///
/// `source_path` is substituted verbatim into an `#include` directive.
pub fn build_skeleton(source_path: &str) -> String {
    format!(
        r#"
#include <iostream>
#include "seephit.h"
using namespace std;

int main()
{{
  constexpr auto nodes =
  #include "{source_path}"

  dumpNode(nodes, 0, 0);
}}

"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_source_path() {
        let program = build_skeleton("tests/page.spt");
        assert!(program.contains("  #include \"tests/page.spt\"\n"));
        assert!(program.contains("#include \"seephit.h\"\n"));
        assert!(program.contains("  dumpNode(nodes, 0, 0);\n"));
    }

    #[test]
    fn test_path_is_not_validated() {
        let program = build_skeleton("");
        assert!(program.contains("#include \"\"\n"));
        assert!(program.starts_with("\n#include <iostream>\n"));
        assert!(program.ends_with("}\n\n"));
    }
}
