pub mod gdg_logo;
pub mod history_panel;
pub mod level_selector;
pub mod question_result;
pub mod spinning_wheel;

pub use gdg_logo::GdgLogo;
pub use history_panel::HistoryPanel;
pub use level_selector::LevelSelector;
pub use question_result::QuestionResult;
pub use spinning_wheel::SpinningWheel;
