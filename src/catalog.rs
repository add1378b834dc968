mod fallback;
mod loader;
mod model;

pub use loader::{
    load, parse_categories_file, parse_news_file, parse_skills_file, resolve_data_dir,
    Catalog, DATA_DIR_ENV, DEFAULT_DATA_DIR,
};
pub use model::{Category, NewsItem, SkillItem};
