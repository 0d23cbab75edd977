//! Layout composition for routed pages.
//!
//! Every public page is wrapped in the same chrome, in fixed order: header,
//! banner carousel (home only, and only with banners), fade-in wrapper
//! around the page body, testimonials (home only, and only when enabled),
//! footer, floating contact button. The composer receives the route as an
//! explicit parameter - it never inspects ambient request state - so the
//! rules here are plain functions over data.

use perfume_house_core::{Banner, BannerContent, Category, StoreSettings};

use crate::carousel::Carousel;
use crate::fade;
use crate::navigator::CategoryMenu;
use crate::state::AppState;
use crate::theme::styles;

/// Store name shown when no settings record exists.
pub const FALLBACK_STORE_NAME: &str = "Perfume Store";
/// Logo shown when no settings record exists.
pub const FALLBACK_LOGO_URL: &str = "/static/logo.png";
/// Background of the layout root when the theme sets neither a gradient
/// nor a flat color. Intentionally different from the global variable
/// fallback; kept for compatibility with the original styling.
pub const FALLBACK_LAYOUT_BACKGROUND: &str = "linear-gradient(135deg, #232526 0%, #414345 100%)";

/// A routed page, passed explicitly into the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category(String),
    Product(String),
    Service(String),
}

impl Route {
    /// Whether this is the root path.
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }
}

/// Whether the banner carousel renders for this request.
///
/// Root path only, and only when at least one banner exists.
#[must_use]
pub fn shows_carousel(route: &Route, banner_count: usize) -> bool {
    route.is_home() && banner_count > 0
}

/// Whether the testimonials block renders for this request.
///
/// Root path only, and only when the settings explicitly enable it. This
/// condition is independent of the carousel's.
#[must_use]
pub fn shows_testimonials(route: &Route, settings: Option<&StoreSettings>) -> bool {
    route.is_home() && settings.is_some_and(|s| s.show_testimonials)
}

/// Inline background for the layout root container.
///
/// Mirrors the theme variable precedence but is applied independently of
/// it: gradient first, then flat color, then the diagonal-gradient
/// literal.
#[must_use]
pub fn inline_background(settings: Option<&StoreSettings>) -> String {
    let theme = settings.map(|s| &s.theme_settings);

    if let Some(gradient) = theme.and_then(|t| t.background_gradient.as_deref())
        && !gradient.trim().is_empty()
    {
        return gradient.to_string();
    }
    if let Some(color) = theme.and_then(|t| t.background_color.as_deref())
        && !color.is_empty()
    {
        return color.to_string();
    }
    FALLBACK_LAYOUT_BACKGROUND.to_string()
}

/// Document metadata rendered into `<head>` for every wrapped page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
    /// Comma-joined keyword list; empty means the tag is omitted.
    pub keywords: String,
    /// Empty means the tag is omitted.
    pub favicon_url: String,
    /// Empty means the tag is omitted.
    pub og_image_url: String,
}

impl DocumentMeta {
    /// Derive the metadata with the original fallback chain: meta fields
    /// first, then the store name/description, then blank.
    #[must_use]
    pub fn derive(settings: Option<&StoreSettings>) -> Self {
        let title = settings
            .and_then(|s| s.meta_title.clone().or_else(|| s.store_name.clone()))
            .unwrap_or_else(|| " ".to_string());
        let description = settings
            .and_then(|s| {
                s.meta_description
                    .clone()
                    .or_else(|| s.store_description.clone())
            })
            .unwrap_or_default();

        Self {
            title,
            description,
            keywords: settings.map(|s| s.keywords.join(", ")).unwrap_or_default(),
            favicon_url: settings
                .and_then(|s| s.favicon_url.clone())
                .unwrap_or_default(),
            og_image_url: settings
                .and_then(|s| s.og_image_url.clone())
                .unwrap_or_default(),
        }
    }
}

// =============================================================================
// Template view types
// =============================================================================

/// Banner display data for templates. Dispatch on the type tag happens
/// here, exhaustively, so the template just branches on `is_image`.
#[derive(Debug, Clone)]
pub struct BannerView {
    pub is_image: bool,
    pub image_url: String,
    pub title: String,
    pub description: String,
}

impl From<&Banner> for BannerView {
    fn from(banner: &Banner) -> Self {
        match &banner.content {
            BannerContent::Image {
                image_url,
                title,
                description,
            } => {
                // An image banner without a URL degrades to the text panel.
                let url = image_url.clone().unwrap_or_default();
                Self {
                    is_image: !url.is_empty(),
                    image_url: url,
                    title: title.clone().unwrap_or_default(),
                    description: description.clone().unwrap_or_default(),
                }
            }
            BannerContent::Text { title, description } => Self {
                is_image: false,
                image_url: String::new(),
                title: title.clone().unwrap_or_default(),
                description: description.clone().unwrap_or_default(),
            },
        }
    }
}

/// Category display data for the header menu.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
        }
    }
}

/// Everything the base layout template needs, assembled per request.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub store_name: String,
    pub logo_url: String,
    pub store_description: String,
    pub meta: DocumentMeta,
    pub background: String,
    pub theme_css: String,
    pub fade_css: String,
    pub show_carousel: bool,
    pub banners: Vec<BannerView>,
    pub carousel_position: usize,
    pub show_indicators: bool,
    pub show_testimonials: bool,
    pub categories: Vec<CategoryView>,
    pub whatsapp_href: String,
}

impl PageChrome {
    /// Assemble the chrome for one request.
    ///
    /// Fetches the category menu fresh (per mount, uncached) and snapshots
    /// the bootstrap and carousel state.
    pub async fn assemble(state: &AppState, route: &Route) -> Self {
        let (settings, banners) = state.bootstrap().snapshot();
        let menu = CategoryMenu::load(state.gateway()).await;
        let carousel = Carousel::new(banners.len());

        let show_carousel = shows_carousel(route, banners.len());
        let show_testimonials = shows_testimonials(route, settings.as_ref());

        Self {
            store_name: settings
                .as_ref()
                .and_then(|s| s.store_name.clone())
                .unwrap_or_else(|| FALLBACK_STORE_NAME.to_string()),
            logo_url: settings
                .as_ref()
                .and_then(|s| s.logo_url.clone())
                .unwrap_or_else(|| FALLBACK_LOGO_URL.to_string()),
            store_description: settings
                .as_ref()
                .and_then(|s| s.store_description.clone())
                .unwrap_or_default(),
            meta: DocumentMeta::derive(settings.as_ref()),
            background: inline_background(settings.as_ref()),
            theme_css: styles::snapshot().css_custom_properties(),
            fade_css: fade::page_fade_css(),
            show_carousel,
            banners: banners.iter().map(BannerView::from).collect(),
            carousel_position: state.carousel().position(),
            show_indicators: carousel.shows_indicators(),
            show_testimonials,
            categories: menu.categories().iter().map(CategoryView::from).collect(),
            whatsapp_href: state.config().contact_whatsapp.as_ref().map_or_else(
                || "#contact".to_string(),
                |number| format!("https://wa.me/{number}"),
            ),
        }
    }
}
