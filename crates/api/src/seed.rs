//! Demo catalog loaded into an empty store at startup.
//!
//! Everything goes through the normal `create_*` paths, so validation runs
//! and the category counters match the seeded assets.

use creatorhub_db::models::asset::CreateAsset;
use creatorhub_db::models::category::CreateCategory;
use creatorhub_db::models::user::CreateUser;
use creatorhub_db::EntityStore;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

struct CategorySeed {
    name: &'static str,
    description: &'static str,
    icon_name: &'static str,
}

struct CreatorSeed {
    username: &'static str,
    display_name: &'static str,
    bio: &'static str,
    avatar_url: &'static str,
}

struct AssetSeed {
    title: &'static str,
    description: &'static str,
    preview_url: &'static str,
    price: f64,
    category: usize,
    creator: usize,
    tags: &'static [&'static str],
    featured: bool,
    thumbnails: &'static [&'static str],
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Graphics & Design",
        description: "Illustrations, UI kits, icons, and more",
        icon_name: "ri-image-line",
    },
    CategorySeed {
        name: "Code & Scripts",
        description: "Templates, plugins, and components",
        icon_name: "ri-code-s-slash-line",
    },
    CategorySeed {
        name: "Video Templates",
        description: "Intros, transitions, and effects",
        icon_name: "ri-video-line",
    },
    CategorySeed {
        name: "Fonts",
        description: "Typography for all your projects",
        icon_name: "ri-font-size-2",
    },
    CategorySeed {
        name: "Audio & Music",
        description: "Sound effects, music tracks, and more",
        icon_name: "ri-music-2-line",
    },
    CategorySeed {
        name: "Game Assets",
        description: "Sprites, models, and textures",
        icon_name: "ri-gamepad-line",
    },
];

const CREATORS: &[CreatorSeed] = &[
    CreatorSeed {
        username: "designpro",
        display_name: "Sarah Johnson",
        bio: "UI/UX Designer specializing in clean, modern interfaces.",
        avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330",
    },
    CreatorSeed {
        username: "codemaster",
        display_name: "Alex Thompson",
        bio: "Full-Stack Developer with a passion for clean code.",
        avatar_url: "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6",
    },
    CreatorSeed {
        username: "3dlab",
        display_name: "Maya Rodriguez",
        bio: "3D Artist creating stunning assets for games and applications.",
        avatar_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956",
    },
    CreatorSeed {
        username: "videowizard",
        display_name: "Daniel Kim",
        bio: "Motion Designer with 10+ years of experience.",
        avatar_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e",
    },
    CreatorSeed {
        username: "sounddesigner",
        display_name: "James Wilson",
        bio: "Audio engineer and composer for multimedia projects.",
        avatar_url: "https://images.unsplash.com/photo-1522075469751-3a6694fb2f61",
    },
    CreatorSeed {
        username: "typefoundry",
        display_name: "Emily Chen",
        bio: "Typography designer creating functional and beautiful typefaces.",
        avatar_url: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7",
    },
];

const ASSETS: &[AssetSeed] = &[
    AssetSeed {
        title: "Ultimate UI Component Library",
        description: "400+ components, dark/light themes & Figma files included",
        preview_url: "https://images.unsplash.com/photo-1558655146-9f40138edfeb",
        price: 49.0,
        category: 0,
        creator: 0,
        tags: &["ui", "design", "components", "figma"],
        featured: true,
        thumbnails: &[
            "https://images.unsplash.com/photo-1558655146-9f40138edfeb",
            "https://images.unsplash.com/photo-1559028012-481c04fa702d",
            "https://images.unsplash.com/photo-1618788372246-79faff0c3742",
        ],
    },
    AssetSeed {
        title: "React Dashboard Starter",
        description: "Clean architecture, Redux integration & API services",
        preview_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c",
        price: 29.0,
        category: 1,
        creator: 1,
        tags: &["react", "redux", "dashboard", "template"],
        featured: false,
        thumbnails: &["https://images.unsplash.com/photo-1555066931-4365d14bab8c"],
    },
    AssetSeed {
        title: "3D Icon Collection",
        description: "150+ 3D icons in multiple formats with source files",
        preview_url: "https://images.unsplash.com/photo-1633356122102-3fe601e05bd2",
        price: 39.0,
        category: 0,
        creator: 2,
        tags: &["3d", "icons", "design"],
        featured: false,
        thumbnails: &["https://images.unsplash.com/photo-1633356122102-3fe601e05bd2"],
    },
    AssetSeed {
        title: "Cinematic FX Pack",
        description: "Premiere & After Effects templates with 4K resolution",
        preview_url: "https://images.unsplash.com/photo-1536240478700-b869070f9279",
        price: 59.0,
        category: 2,
        creator: 3,
        tags: &["video", "effects", "premiere", "after effects"],
        featured: true,
        thumbnails: &["https://images.unsplash.com/photo-1536240478700-b869070f9279"],
    },
    AssetSeed {
        title: "Cinematic Sound FX Pack",
        description: "200+ high-quality sound effects for videos & games",
        preview_url: "https://images.unsplash.com/photo-1539278670307-a69d04dc8a75",
        price: 35.0,
        category: 4,
        creator: 4,
        tags: &["audio", "sound effects", "cinematic"],
        featured: false,
        thumbnails: &["https://images.unsplash.com/photo-1539278670307-a69d04dc8a75"],
    },
    AssetSeed {
        title: "Neo Sans Font Family",
        description: "Clean, modern typeface with 12 weights & multilingual support",
        preview_url: "https://images.unsplash.com/photo-1561070791-2526d30994b5",
        price: 79.0,
        category: 3,
        creator: 5,
        tags: &["font", "typography", "sans-serif"],
        featured: true,
        thumbnails: &["https://images.unsplash.com/photo-1561070791-2526d30994b5"],
    },
];

/// Counts of rows written by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub creators: usize,
    pub assets: usize,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Load the demo catalog when the store has no categories yet.
///
/// Returns `Ok(None)` without writing anything if the store already holds
/// data.
pub async fn seed_demo_data(store: &dyn EntityStore) -> AppResult<Option<SeedSummary>> {
    if !store.list_categories().await?.is_empty() {
        tracing::info!("Store already has data, skipping demo seed");
        return Ok(None);
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for seed in CATEGORIES {
        let category = store
            .create_category(&CreateCategory {
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                icon_name: seed.icon_name.to_string(),
            })
            .await?;
        category_ids.push(category.id);
    }

    // Shared by every demo account.
    let password_hash = hash_password(DEMO_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mut creator_ids = Vec::with_capacity(CREATORS.len());
    for seed in CREATORS {
        let user = store
            .create_user(&CreateUser {
                username: seed.username.to_string(),
                password_hash: password_hash.clone(),
                display_name: seed.display_name.to_string(),
                bio: Some(seed.bio.to_string()),
                avatar_url: Some(seed.avatar_url.to_string()),
                is_creator: Some(true),
            })
            .await?;
        creator_ids.push(user.id);
    }

    for seed in ASSETS {
        let input = CreateAsset {
            title: seed.title.to_string(),
            description: Some(seed.description.to_string()),
            preview_url: seed.preview_url.to_string(),
            price: seed.price,
            category_id: category_ids[seed.category],
            tags: Some(owned(seed.tags)),
            featured: Some(seed.featured),
            thumbnails: Some(owned(seed.thumbnails)),
        };
        store.create_asset(creator_ids[seed.creator], &input).await?;
    }

    let summary = SeedSummary {
        categories: CATEGORIES.len(),
        creators: CREATORS.len(),
        assets: ASSETS.len(),
    };
    tracing::info!(
        categories = summary.categories,
        creators = summary.creators,
        assets = summary.assets,
        "Demo data seeded",
    );
    Ok(Some(summary))
}
