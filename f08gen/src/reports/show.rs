//! Show command report data structures.

use f08gen_types::{BindingFragments, Diagnostic};

use super::output::{Output, Report};

/// Fragments of every selected function variant.
#[derive(Debug, Default)]
pub struct ShowReport {
    pub bindings: Vec<BindingFragments>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ShowReport {
    /// Pretty JSON with the fragments and any diagnostics.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "bindings": self.bindings,
            "diagnostics": self.diagnostics,
        }))
    }
}

fn variant_label(binding: &BindingFragments) -> String {
    let mut label = format!("{} ({}", binding.api_name, binding.variant.mode);
    if binding.variant.bigcount {
        label.push_str(", bigcount");
    }
    label.push(')');
    label
}

fn block<'a>(out: &mut dyn Output, name: &str, lines: impl Iterator<Item = &'a str>) {
    let lines: Vec<&str> = lines.collect();
    if lines.is_empty() {
        return;
    }
    out.section(name);
    for line in lines {
        for part in line.lines() {
            out.preformatted(&format!("    {}", part));
        }
    }
}

impl Report for ShowReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.warning(&diag.to_string());
        }

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.divider(&variant_label(binding));

            block(out, "predeclare", binding.predeclares());
            let imports = binding.imports.render();
            block(out, "uses", imports.iter().map(String::as_str));
            let includes: Vec<String> = binding
                .includes
                .iter()
                .map(|i| format!("include '{}'", i))
                .collect();
            block(out, "include", includes.iter().map(String::as_str));
            block(out, "declarations", binding.declarations());
            block(out, "shim declarations", binding.cbinding_declarations());
            block(out, "temporaries", binding.temporaries());
            block(out, "pre-call", binding.pre_call());

            let args: Vec<&str> = binding.arguments().collect();
            out.section("call");
            out.preformatted(&format!("    CALL {}({})", binding.api_name, args.join(", ")));

            block(out, "post-call", binding.post_call());
            let c_params: Vec<&str> = binding.c_parameters().collect();
            out.key_value("C parameters", &c_params.join(", "));
        }
    }
}
