//! `bake doctypes` – show document types and their template bindings.

use bake_core::config::EffectiveConfiguration;

pub fn run_doctypes(cfg: &EffectiveConfiguration) {
    let types = cfg.document_types();
    if types.is_empty() {
        println!("No document types configured.");
        return;
    }
    println!("{:<14} {:<10} {}", "TYPE", "EXTENSION", "TEMPLATE");
    for doc_type in types {
        let template = cfg
            .template_file_for(doc_type)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:<10} {}",
            doc_type,
            cfg.output_extension_for(doc_type),
            template
        );
    }
}
