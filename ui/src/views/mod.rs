mod analysis;
pub use analysis::AnalysisScreen;

mod about;
pub use about::AboutPanel;

mod github;
pub use github::GithubPanel;

mod root;
pub use root::{ClassifierHandle, LucidRoot};
