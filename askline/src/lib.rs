//! # Askline
//!
//! Interactive console prompts that keep asking until the answer meets a
//! set of composable requirements.
//!
//! ## Features
//!
//! - **Composable requirements** - small rules (`NotEmpty`, `Number`, `Between`,
//!   `Choice`, `Menu`, `Date`) that test and convert input, chained left to right
//! - **Friendly rejections** - every rejected answer is explained by a
//!   [`ValidationOutcome`](utils::ValidationOutcome) and asked again
//! - **Cancellation** - typing an exit keyword (`exit`, `quit`) aborts the whole
//!   interaction with [`PromptError::Cancelled`](utils::PromptError::Cancelled)
//! - **Injected I/O** - the console is just one [`Reader`](utils::Reader) /
//!   [`Writer`](utils::Writer); tests drive prompts with scripted answers
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! askline = "0.1"
//! ```
//!
//! Enable `features = ["serde"]` to serialize outcomes and load
//! [`PromptConfig`](utils::PromptConfig) from your own config files.
//!
//! ## Usage Examples
//!
//! ### Asking on the console
//!
//! ```rust,no_run
//! use askline::utils::{Prompt, PromptError};
//!
//! fn setup() -> Result<(), PromptError> {
//!     let mut prompt = Prompt::console();
//!
//!     println!("What's your name?");
//!     let name = prompt.ask_name()?;
//!
//!     println!("How many threads?");
//!     let threads = prompt.ask_bounded_number(1, 16)?;
//!
//!     println!("Scan type?");
//!     let deep = prompt.ask_choice([("quick", false), ("deep", true)])?;
//!
//!     println!("{} runs a {} scan on {} threads", name, if deep { "deep" } else { "quick" }, threads);
//!     Ok(())
//! }
//!
//! match setup() {
//!     Err(PromptError::Cancelled) => println!("Cancelled."),
//!     Err(e) => eprintln!("{}", e),
//!     Ok(()) => {}
//! }
//! ```
//!
//! ### Custom chains
//!
//! ```rust
//! use askline::chain;
//! use askline::utils::{Between, Number, Prompt, ScriptedReader, Transcript};
//!
//! let mut prompt = Prompt::new(ScriptedReader::new(["12", "-4"]), Transcript::default());
//!
//! let offset = prompt.ask(&chain![Number, Between::new(-5, 5)]).unwrap();
//!
//! assert_eq!(offset, -4);
//! assert_eq!(
//!     prompt.writer().output(),
//!     "(-5 - 5) Please provide a value between -5 and 5\n(-5 - 5) "
//! );
//! ```
//!
//! ## Error Handling
//!
//! Invalid input never leaves the loop. Everything that does is a
//! [`PromptError`](utils::PromptError):
//!
//! ```rust,no_run
//! use askline::utils::{Prompt, PromptError};
//!
//! match Prompt::console().ask_number() {
//!     Ok(n) => println!("Got {}", n),
//!     Err(PromptError::Cancelled) => println!("User asked to quit"),
//!     Err(PromptError::InputClosed) => eprintln!("No more input"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Rejections and cancellations are reported through [`tracing`]; install a
//! subscriber to see them.

pub mod utils;
