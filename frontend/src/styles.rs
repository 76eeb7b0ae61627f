pub const NAV: &str = "fixed top-0 z-50 w-full bg-black/20 backdrop-blur-md border-b border-white/10";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-white hover:text-yellow-200 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const FOOTER: &str = "w-full bg-black/20 backdrop-blur-md border-t border-white/10";
pub const FOOTER_TEXT: &str = "text-sm font-medium text-white/70";

pub const PAGE: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const PAGE_TITLE: &str = "text-5xl font-bold text-center text-white drop-shadow-lg mb-2";
pub const PAGE_SUBTITLE: &str = "text-center text-white/80 text-lg mb-10";
pub const WHEEL_CARD: &str = "rounded-3xl p-8 shadow-2xl bg-white/10 backdrop-blur-lg border border-white/20 flex flex-col items-center";

pub const TEXT_SMALL: &str = "text-sm text-white/70";
pub const TEXT_SECONDARY: &str = "text-gray-500 dark:text-gray-400 font-medium";
pub const ALERT_ERROR: &str = "bg-red-50/90 border border-red-200 rounded-lg p-4 text-red-700";
pub const LOADING_SPINNER: &str = "animate-spin h-8 w-8 rounded-full border-4 border-white/30 border-t-white";
