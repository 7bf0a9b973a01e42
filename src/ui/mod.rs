pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{
    banner, dim, error, header, info, muted, origin_badge, section, status, success, summary_row, warn,
};
pub use progress::BatchProgress;
pub use table::{category_table, snippet_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
