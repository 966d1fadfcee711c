use clap::Parser;
use league_rankings::config::toml_config::TomlConfig;
use league_rankings::core::MatchSource;
use league_rankings::utils::{logger, validation::Validate};
use league_rankings::{CliConfig, FileSource, LeagueEngine, LeagueError, StdinSource};

fn main() {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)
    if let Some(path) = config.config.clone() {
        let loaded = TomlConfig::from_file(&path).and_then(|file| {
            file.validate()?;
            config.merge_file(&file)
        });
        if let Err(e) = loaded {
            eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let result = match &config.file {
        Some(path) => run(FileSource::new(path.clone()), &config),
        None => run(StdinSource, &config),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end_matches('\n')),
        Err(e) => {
            tracing::error!(
                "❌ Ranking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn run<S: MatchSource>(source: S, config: &CliConfig) -> Result<String, LeagueError> {
    LeagueEngine::new(source)
        .with_format(config.output_format())
        .run()
}
