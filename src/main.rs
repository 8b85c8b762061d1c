//! CLI entry point for folio.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};

use folio::article::Article;
use folio::cli::{Cli, OutputFormat};
use folio::config::{DefaultSelection, ReaderConfig};
use folio::logging::init_logging;
use folio::options::OptionCatalog;
use folio::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "folio", &mut std::io::stdout());
        return Ok(());
    }

    // Layer built-in defaults, the TOML file and CLI overrides
    let config = ReaderConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    let catalog = OptionCatalog::builtin();
    let defaults = config
        .resolve_defaults(&catalog)
        .wrap_err("Invalid default settings")?;
    let catalog = catalog.with_defaults(defaults);

    if cli.print_settings {
        let output = match cli.format {
            OutputFormat::Yaml => serde_yaml::to_string(&catalog.defaults)
                .wrap_err("Failed to serialize settings to YAML")?,
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&catalog.defaults)
                    .wrap_err("Failed to serialize settings to JSON")?;
                json.push('\n');
                json
            }
            OutputFormat::Toml => ReaderConfig {
                article: config.article.clone(),
                defaults: DefaultSelection::from_record(&catalog.defaults),
            }
            .to_toml()
            .wrap_err("Failed to serialize settings to TOML")?,
        };
        print!("{output}");
        return Ok(());
    }

    let article = match &config.article.path {
        Some(path) => Article::load(path)
            .wrap_err_with(|| format!("Failed to read article {}", path.display()))?,
        None => Article::sample(),
    };

    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));
    tracing::info!(title = %article.title, "starting reader");

    tui::run(catalog, article)
}
