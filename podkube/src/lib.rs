pub mod clipboard;
pub mod error;
pub mod invocation;
pub mod lookup;
pub mod namespace;
pub mod pods;
pub mod report;
pub mod select;
pub mod settings;

pub use clipboard::{Clipboard, SystemClipboard};
pub use error::{PodidError, Result};
pub use invocation::Invocation;
pub use namespace::{ContextTool, NamespaceResolver, NamespaceSource, Target};
pub use pods::{KubePods, PodLister, PodSummary};
pub use select::Selection;
pub use settings::Settings;
