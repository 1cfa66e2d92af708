use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "CoralGuard";

// Simulated profile photo upload
pub const UPLOAD_DELAY_MS: u32 = 1_500;
pub const UPLOAD_SUCCESS_DISPLAY_MS: u32 = 3_000;

// Simulated contact form submission
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUBMIT_SUCCESS_DISPLAY_MS: u32 = 5_000;

// Fact card counters
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_MS: u32 = 16;

pub const HERO_VIDEO: &str = "/coral-reef.mp4";
pub const GALLERY_PREVIEW_IMAGE: &str = "/images/3d-gallery-preview.jpg";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const INDEX_HTML: &str = include_str!("../index.html");
    const TRUNK_TOML: &str = include_str!("../Trunk.toml");

    #[test]
    fn public_media_land_in_the_bundle_root() {
        // copy-dir would nest everything under dist/public/
        assert!(!INDEX_HTML.contains(r#"rel="copy-dir" href="public""#));
        assert!(TRUNK_TOML.contains(r#"stage = "post_build""#));
        assert!(TRUNK_TOML.contains(r#"cp -R public/. \"$TRUNK_STAGING_DIR\"/"#));

        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        assert!(public.join(PLACEHOLDER_IMAGE.trim_start_matches('/')).is_file());
    }

    #[test]
    fn media_paths_are_root_relative() {
        for path in [HERO_VIDEO, GALLERY_PREVIEW_IMAGE, PLACEHOLDER_IMAGE] {
            assert!(path.starts_with('/'), "{path}");
            assert!(!path.starts_with("/public/"), "{path}");
        }
    }
}
