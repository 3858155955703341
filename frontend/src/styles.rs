pub const MAIN: &str = "bg-gray-950 text-gray-100 overflow-x-hidden flex flex-col min-h-screen";
pub const HEADER: &str = "border-b border-white/10 sticky top-0 bg-gray-950/60 backdrop-blur-xl z-50";
pub const HEADER_INNER: &str = "container mx-auto px-4 py-4 flex items-center justify-between";
pub const CONTENT: &str = "flex-1 flex flex-col items-center justify-center py-6 md:py-10";
pub const CONTENT_INNER: &str = "w-full max-w-7xl px-4 relative z-10";
pub const FOOTER: &str = "border-t border-white/10 bg-gray-950/60 backdrop-blur-xl py-4";
pub const FOOTER_INNER: &str = "container mx-auto px-4 text-center text-xs text-gray-400";

pub const TITLE: &str = "text-4xl md:text-6xl font-bold mb-4";
pub const SUBTITLE: &str = "text-gray-400 text-sm md:text-lg max-w-2xl mx-auto";
pub const SECTION_HEADING: &str = "text-xl font-semibold text-center text-gray-100 animate-fade-in";

pub const HISTORY_TOGGLE: &str = "flex items-center gap-2 px-3 py-2 rounded-lg text-sm text-gray-400 hover:text-gray-100 transition-all duration-300";
pub const HISTORY_TOGGLE_OPEN: &str = "flex items-center gap-2 px-3 py-2 rounded-lg text-sm text-gray-100 bg-white/10 transition-all duration-300";
pub const HISTORY_PANEL: &str = "mb-8 p-4 rounded-2xl border border-white/10 bg-gray-900/50 backdrop-blur-sm animate-slide-down";
pub const HISTORY_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-3";
pub const HISTORY_ENTRY: &str = "p-3 rounded-xl border border-white/10 hover:border-white/30 transition-all duration-300 text-left bg-white/5 hover:bg-white/10 hover:scale-[1.02] animate-fade-in-up group";
pub const CLEAR_HISTORY: &str = "flex items-center gap-2 px-3 py-2 rounded-lg text-sm text-red-400 hover:text-red-300 transition-colors";

pub const LEVEL_GRID: &str = "grid grid-cols-2 md:grid-cols-4 gap-3 w-full max-w-3xl mx-auto";
pub const BACK_BUTTON: &str = "flex items-center gap-2 text-gray-400 hover:text-gray-100 transition-all duration-300 hover:-translate-x-1";

pub const SPIN_BUTTON: &str = "relative px-12 py-4 text-lg font-semibold text-white rounded-lg transition-all duration-300 hover:scale-105 active:scale-95";
pub const SPIN_BUTTON_DISABLED: &str = "relative px-12 py-4 text-lg font-semibold text-white rounded-lg transition-all duration-300 cursor-not-allowed opacity-60";

pub const RESULT_CARD: &str = "relative overflow-hidden rounded-3xl p-6 border border-white/10 animate-fade-in-up";
pub const RESULT_EYEBROW: &str = "text-xs uppercase tracking-widest text-gray-400 mb-2";
pub const RESULT_TITLE: &str = "text-2xl md:text-3xl font-bold text-gray-100 animate-title-reveal";
pub const SOLVE_LINK: &str = "inline-flex items-center justify-center gap-2 px-5 py-2.5 rounded-full font-semibold text-white transition-all duration-300 hover:scale-105 hover:shadow-2xl";
pub const RESET_BUTTON: &str = "inline-flex items-center justify-center gap-2 px-5 py-2.5 rounded-full border border-white/20 hover:bg-white/10 text-gray-100 bg-transparent transition-all duration-300 hover:scale-105";
