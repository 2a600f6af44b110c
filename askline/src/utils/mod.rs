pub mod outcome;
pub use outcome::ValidationOutcome;

pub mod requirement;
pub use requirement::{Chain, Requirement, RequirementExt};

pub mod rules;
pub use rules::{Between, Choice, Date, Menu, NotEmpty, Number};

pub mod script;
pub use script::{ScriptedReader, Transcript};

pub mod terminal;
pub use terminal::{Console, Prompt, PromptConfig, PromptError, Reader, Writer};
