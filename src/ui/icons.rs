pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const FOLDER: &str = "📂";
    pub const FILE: &str = "📄";
    pub const NEW: &str = "✨";
    pub const MOD: &str = "📝";
    pub const DEL: &str = "🗑️";
    pub const PACKAGE: &str = "📦";
    pub const DATABASE: &str = "🗄️";
    pub const INBOX: &str = "📥";
    pub const OUTBOX: &str = "📤";
    pub const LOCK: &str = "🔒";
    pub const PERSON: &str = "👤";
    pub const FORK: &str = "🍴";
    pub const WRENCH: &str = "🔧";
}
