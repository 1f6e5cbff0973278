use std::fs;

use anyhow::Result;
use gambot_search::CorpusReader;

use crate::config;

pub fn run(data_dir: &str) -> Result<()> {
    let reader = CorpusReader::new(data_dir);
    let paths = reader.document_paths();
    if paths.is_empty() {
        println!("Nenhum PDF em '{data_dir}'.");
    } else {
        println!("{} PDF(s) em '{data_dir}':", paths.len());
        for path in &paths {
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("?");
            match fs::metadata(path) {
                Ok(meta) => println!("  {} ({:.1} KB)", name, meta.len() as f64 / 1024.0),
                Err(_) => println!("  {name}"),
            }
        }
    }
    match config::resolve(None) {
        Some(cfg) => println!("IA: configurada (modelo {})", cfg.model),
        None => println!("IA: indisponível (sem chave de API)"),
    }
    Ok(())
}
