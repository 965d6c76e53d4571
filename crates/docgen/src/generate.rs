use crate::ai::AiClient;
use crate::prelude::{println, *};
use docgen_core::config::Config;
use docgen_core::files::{is_source_file, output_path, render_markdown, SourceFile};
use ignore::WalkBuilder;

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: usize,
}

/// Document every source file under `config.source_dir`.
///
/// Files are handled one at a time and the first failure aborts the run.
/// Documents written before the failure are left in place.
pub async fn run(config: &Config, client: &AiClient) -> Result<RunSummary> {
    println!(
        "Starting documentation generation for source directory: '{}'",
        config.source_dir.display()
    );

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| {
            f!(
                "Failed to create output directory '{}'",
                config.output_dir.display()
            )
        })?;

    // Plain recursive walk: no .gitignore filtering, hidden files included.
    let walker = WalkBuilder::new(&config.source_dir)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files_written = 0;

    for entry in walker {
        // Unreadable or missing directories are skipped; only matched files are fatal.
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!(
                    "skipping unreadable path under '{}': {}",
                    config.source_dir.display(),
                    err
                );
                continue;
            }
        };

        if !is_regular_file(&entry) || !is_source_file(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        println!("Processing: {}", path.display());

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| f!("Failed to read file '{}'", path.display()))?;
        let source = SourceFile::new(&config.source_dir, path, content)?;

        let documentation = client
            .generate(&source.content)
            .await
            .with_context(|| f!("Failed to document '{}'", source.path.display()))?;

        write_document(config, &source, &documentation).await?;
        files_written += 1;
    }

    println!("Documentation generation complete!");

    Ok(RunSummary { files_written })
}

/// Regular files, plus symlinks that resolve to one. Symlinked directories
/// are never descended into.
fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_symlink() => entry.path().is_file(),
        Some(t) => t.is_file(),
        None => false,
    }
}

async fn write_document(config: &Config, source: &SourceFile, documentation: &str) -> Result<()> {
    let target = output_path(&config.output_dir, &source.relative);

    let parent = target
        .parent()
        .ok_or_eyre("Output path has no parent directory")?;
    tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| f!("Failed to create directory '{}'", parent.display()))?;

    let markdown = render_markdown(source.file_name()?, documentation);
    tokio::fs::write(&target, markdown)
        .await
        .with_context(|| f!("Failed to write '{}'", target.display()))?;

    log::info!("wrote {}", target.display());

    Ok(())
}
