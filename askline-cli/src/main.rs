use askline::utils::{Console, Prompt, PromptConfig, PromptError};
use clap::{ArgAction, Parser};

/// A short interactive session showing every kind of prompt.
///
/// Type `exit` or `quit` at any point to leave.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Text shown right before the cursor on every read
    #[arg(short, long, default_value = "> ")]
    decoration: String,

    /// Keyword that cancels the session (repeatable, replaces the defaults)
    #[arg(short = 'x', long = "exit-keyword")]
    exit_keywords: Vec<String>,
}

impl Cli {
    fn config(&self) -> PromptConfig {
        let config = PromptConfig::default().with_decoration(self.decoration.clone());
        if self.exit_keywords.is_empty() {
            config
        } else {
            config.with_exit_keywords(self.exit_keywords.iter().cloned())
        }
    }

    fn setup_logging(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the prompt.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn banner(config: &PromptConfig) {
    println!("------------------------------------------------------------");
    println!("   ASKLINE  -  answers are checked until they fit");
    println!(
        "   type any of [{}] at a prompt to leave",
        config.exit_keywords.join(", ")
    );
    println!("------------------------------------------------------------");
}

fn session(prompt: &mut Prompt) -> Result<(), PromptError> {
    println!("What's your name?");
    let name = prompt.ask_name()?;

    println!("How old are you?");
    let age = prompt.ask_bounded_number(0, 150)?;

    println!("When is your birthday?");
    let birthday = prompt.ask_date()?;

    println!("Pick a drink:");
    let drink = prompt.ask_menu(vec!["tea", "coffee", "water"])?;

    println!("Pick a lucky number:");
    let lucky = prompt.ask_number()?;

    println!("Save these answers?");
    let save = prompt.ask_choice([("yes", true), ("no", false)])?;

    println!();
    println!("Name:     {}", name);
    println!("Age:      {}", age);
    println!("Birthday: {}", birthday.format("%d.%m.%Y"));
    println!("Drink:    {}", drink);
    println!("Lucky:    {}", lucky);
    println!("Saved:    {}", if save { "yes" } else { "no" });
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.setup_logging();

    let config = cli.config();
    banner(&config);

    let mut prompt = Prompt::with_config(config, Console, Console);

    match session(&mut prompt) {
        Ok(()) => Ok(()),
        Err(PromptError::Cancelled) => {
            println!("Bye!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
