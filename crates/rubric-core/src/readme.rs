//! Markdown description of a label schema

use std::fmt::Write;

use crate::schema::LabelSchema;

/// Render the schema as a README: generic texts, then every factor,
/// subfactor and score definition in schema order.
pub fn generate_readme(schema: &LabelSchema) -> String {
    let generic = &schema.generic;
    let mut readme = String::new();

    let _ = write!(readme, "# {}\n\n", generic.title);
    let _ = write!(readme, "{}\n\n", generic.description);
    let _ = write!(readme, "## {}\n\n", generic.usage.title);
    let _ = write!(readme, "{}\n\n", generic.usage.description);
    let _ = write!(readme, "## {}\n\n", generic.factor);

    for factor in &schema.factors {
        let _ = write!(readme, "### {}\n\n", factor.label);
        let _ = write!(readme, "{}\n\n", factor.description);
        for subfactor in &factor.items {
            let _ = write!(readme, "#### {}\n\n", subfactor.label);
            for (score, description) in subfactor.values.iter() {
                // Two trailing spaces force a Markdown line break
                let _ = writeln!(readme, "`{}` - {}  ", score, description);
            }
            readme.push('\n');
        }
    }

    readme
}
