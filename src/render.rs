mod document;
mod news;
mod page;
mod skills;

pub use document::{html_escape, Document};
pub use news::{news_card, news_filter_chips, render_news, NEWS_GRID_ID};
pub use page::{render_page, STYLESHEETS};
pub use skills::{
    render_skill_filters, render_skills, skill_card, SKILLS_GRID_ID, SKILL_FILTERS_ID,
};
