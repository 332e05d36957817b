use clap::Parser;
use roman_converter::utils::error::ErrorSeverity;
use roman_converter::utils::{logger, validation::Validate};
use roman_converter::{
    CliConfig, ConfigProvider, ConverterError, ConverterMode, Field, HttpConversionService,
    LocalTranslator, NetworkedConverter, TomlConfig,
};
use tokio::io::{AsyncBufReadExt, BufReader};

enum Form {
    Networked(NetworkedConverter<HttpConversionService>),
    Local(LocalTranslator),
}

impl Form {
    fn value(&self, field: Field) -> &str {
        match self {
            Form::Networked(c) => c.value(field),
            Form::Local(t) => t.value(field),
        }
    }

    fn set_value(&mut self, field: Field, text: &str) {
        match self {
            Form::Networked(c) => {
                c.set_value(field, text);
            }
            Form::Local(t) => t.set_value(field, text),
        }
    }

    fn clear(&mut self) {
        match self {
            Form::Networked(c) => {
                c.clear();
            }
            Form::Local(t) => t.clear(),
        }
    }

    async fn submit(&mut self) -> Result<(), ConverterError> {
        match self {
            Form::Networked(c) => c.submit().await,
            Form::Local(t) => t.submit(),
        }
    }

    fn print(&self) {
        println!(
            "{}: {}",
            Field::RomanNumeral.label(),
            self.value(Field::RomanNumeral)
        );
        println!("{}: {}", Field::Integer.label(), self.value(Field::Integer));
    }
}

fn exit_code(e: &ConverterError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 4,
    }
}

fn report(e: &ConverterError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn load_config() -> Result<(CliConfig, Option<String>), ConverterError> {
    let mut config = CliConfig::parse();
    let mut log_level = None;

    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)?;
        file.validate()?;
        log_level = file.log_level().map(str::to_string);
        config.merge_file(&file);
    }

    Ok((config, log_level))
}

async fn run_session(form: &mut Form) -> anyhow::Result<()> {
    println!("Commands: roman <text> | integer <text> | convert | show | clear | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "roman" => form.set_value(Field::RomanNumeral, argument.trim()),
            "integer" => form.set_value(Field::Integer, argument.trim()),
            "convert" => match form.submit().await {
                Ok(()) => form.print(),
                Err(e) => report(&e),
            },
            "show" => form.print(),
            "clear" => form.clear(),
            "quit" | "exit" => break,
            other => eprintln!("Unknown command: {}", other),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, log_level) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose, log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, log_level.as_deref());
    }

    tracing::info!("🚀 Starting roman-converter ({:?} mode)", config.mode());
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report(&e);
        std::process::exit(exit_code(&e));
    }

    let mut form = match config.mode() {
        ConverterMode::Networked => {
            tracing::info!("🌐 Using conversion service at {}", config.base_url());
            Form::Networked(NetworkedConverter::new(HttpConversionService::from_config(
                &config,
            )?))
        }
        ConverterMode::Local => Form::Local(LocalTranslator::new()),
    };

    let one_shot = match (&config.roman, &config.integer) {
        (Some(roman), _) => Some((Field::RomanNumeral, roman.as_str())),
        (None, Some(integer)) => Some((Field::Integer, integer.as_str())),
        (None, None) => None,
    };

    match one_shot {
        Some((field, text)) => {
            form.set_value(field, text);
            if let Err(e) = form.submit().await {
                report(&e);
                std::process::exit(exit_code(&e));
            }
            form.print();
        }
        None => run_session(&mut form).await?,
    }

    Ok(())
}
