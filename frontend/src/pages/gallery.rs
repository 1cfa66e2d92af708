use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConservationStatus {
    CriticallyEndangered,
    NearThreatened,
}

impl ConservationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
            ConservationStatus::NearThreatened => "Near Threatened",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ConservationStatus::CriticallyEndangered => "status-badge critical",
            ConservationStatus::NearThreatened => "status-badge threatened",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoralSpecies {
    pub id: u32,
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub status: ConservationStatus,
    pub model_path: &'static str,
    pub scale: f64,
}

// Camera and orbit settings handed to the <model-viewer> element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub camera_position: [f64; 3],
    pub field_of_view_deg: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub zoom_speed: f64,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
}

pub const VIEWER_SETTINGS: ViewerSettings = ViewerSettings {
    camera_position: [15.0, 100.0, 15.0],
    field_of_view_deg: 30.0,
    min_distance: 1.0,
    max_distance: 175.0,
    zoom_speed: 2.0,
    enable_zoom: true,
    enable_pan: true,
    enable_rotate: true,
};

impl ViewerSettings {
    pub fn camera_distance(&self) -> f64 {
        let [x, y, z] = self.camera_position;
        (x * x + y * y + z * z).sqrt()
    }

    // Spherical "theta phi radius" as model-viewer's camera-orbit expects,
    // with y as the up axis.
    pub fn camera_orbit(&self) -> String {
        let [x, y, z] = self.camera_position;
        let radius = self.camera_distance();
        if radius == 0.0 {
            return format!("0deg 90deg {}m", self.min_distance);
        }
        let theta = x.atan2(z).to_degrees();
        let phi = (y / radius).acos().to_degrees();
        format!("{:.1}deg {:.1}deg {:.1}m", theta, phi, radius)
    }

    pub fn field_of_view(&self) -> String {
        format!("{}deg", self.field_of_view_deg)
    }

    pub fn min_camera_orbit(&self) -> String {
        format!("auto auto {}m", self.min_distance)
    }

    pub fn max_camera_orbit(&self) -> String {
        format!("auto auto {}m", self.max_distance)
    }

    pub fn interaction_prompt_enabled(&self) -> bool {
        self.enable_rotate || self.enable_zoom
    }
}

pub static CORAL_SPECIES: [CoralSpecies; 3] = [
    CoralSpecies {
        id: 1,
        name: "Staghorn Coral",
        scientific_name: "Acropora cervicornis",
        description: "Staghorn coral is a branching coral with cylindrical branches that resemble the antlers of a male deer. It is one of the fastest-growing corals and is important for reef building. These corals provide essential habitat for fish, snails, crabs, and other marine species.",
        location: "Caribbean, Florida Keys",
        status: ConservationStatus::CriticallyEndangered,
        model_path: "/assets/3d/model1.glb",
        scale: 0.5,
    },
    CoralSpecies {
        id: 2,
        name: "Brain Coral",
        scientific_name: "Diploria labyrinthiformis",
        description: "Brain coral gets its name from its appearance, which resembles a human brain. It forms large, rounded structures with a grooved surface pattern. These slow-growing corals can live for several centuries and are important for building reef structure and providing habitat.",
        location: "Atlantic Ocean, Caribbean",
        status: ConservationStatus::NearThreatened,
        model_path: "/assets/3d/model2.glb",
        scale: 0.5,
    },
    CoralSpecies {
        id: 3,
        name: "Elkhorn Coral",
        scientific_name: "Acropora palmata",
        description: "Elkhorn coral is named for its resemblance to elk antlers. It has broad, flattened branches and is a major reef-building coral in the Caribbean. Once abundant throughout the Caribbean, elkhorn coral populations have declined by more than 90% since the 1980s.",
        location: "Caribbean, Bahamas",
        status: ConservationStatus::CriticallyEndangered,
        model_path: "/assets/3d/model3.glb",
        scale: 0.5,
    },
];

#[derive(Properties, PartialEq)]
pub struct CoralViewerProps {
    pub coral: &'static CoralSpecies,
    pub settings: ViewerSettings,
}

#[function_component(CoralViewer)]
pub fn coral_viewer(props: &CoralViewerProps) -> Html {
    let coral = props.coral;
    let settings = &props.settings;

    html! {
        <div class="coral-viewer">
            <div class="coral-viewer-title">
                <h3>{coral.name}</h3>
                <p class="scientific-name">{coral.scientific_name}</p>
            </div>

            <div class="coral-viewer-stage">
                <model-viewer
                    src={coral.model_path}
                    alt={format!("3D model of {}", coral.name)}
                    scale={format!("{0} {0} {0}", coral.scale)}
                    camera-orbit={settings.camera_orbit()}
                    field-of-view={settings.field_of_view()}
                    min-camera-orbit={settings.min_camera_orbit()}
                    max-camera-orbit={settings.max_camera_orbit()}
                    interpolation-decay="100"
                    zoom-sensitivity={settings.zoom_speed.to_string()}
                    camera-controls={settings.enable_rotate.then_some("")}
                    disable-zoom={(!settings.enable_zoom).then_some("")}
                    disable-pan={(!settings.enable_pan).then_some("")}
                    interaction-prompt={if settings.interaction_prompt_enabled() { "auto" } else { "none" }}
                    environment-image="neutral"
                    exposure="1"
                >
                    <div slot="poster" class="coral-viewer-loading">
                        <p>{"Loading..."}</p>
                    </div>
                </model-viewer>
            </div>

            <div class="coral-viewer-hint">
                <span>{"ⓘ"}</span>
                <p>{"Click and drag to rotate. Scroll to zoom."}</p>
            </div>

            <div class="coral-viewer-details">
                <p>{coral.description}</p>
                <div class="coral-viewer-badges">
                    <span class="location-badge">{coral.location}</span>
                    <span class={coral.status.badge_class()}>{coral.status.label()}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <main class="page gallery-page">
            <div class="page-intro">
                <h1>{"3D Coral Reef Gallery"}</h1>
                <p>
                    {"Explore interactive 3D models of coral species. Each model represents a different type of coral that plays a vital role in reef ecosystems."}
                </p>
            </div>

            <div class="gallery-grid">
                { for CORAL_SPECIES.iter().map(|coral| html! {
                    <CoralViewer key={coral.id} coral={coral} settings={VIEWER_SETTINGS} />
                }) }
            </div>

            <section class="gallery-diversity">
                <h2>{"Why Coral Diversity Matters"}</h2>
                <p>
                    {"Each coral species plays a unique role in reef ecosystems. Different growth forms provide varied habitats for marine life, from small fish seeking shelter in branching corals to crustaceans making homes in massive corals. This diversity creates the complex structure of coral reefs that supports thousands of species and provides coastal protection, food security, and economic benefits to millions of people worldwide."}
                </p>
            </section>
            <style>
                {r#"
                .gallery-grid {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                }
                .coral-viewer {
                    display: flex;
                    flex-direction: column;
                }
                .coral-viewer-title {
                    border: 1px solid #1f2937;
                    border-bottom: none;
                    border-radius: 8px 8px 0 0;
                    background: linear-gradient(to bottom, #111827, rgba(0, 0, 0, 0.5));
                    padding: 1rem;
                    text-align: center;
                }
                .scientific-name {
                    font-style: italic;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .coral-viewer-stage {
                    height: 300px;
                    border-left: 1px solid #1f2937;
                    border-right: 1px solid #1f2937;
                    background: linear-gradient(to bottom, #111827, rgba(0, 0, 0, 0.5));
                }
                .coral-viewer-stage model-viewer {
                    width: 100%;
                    height: 100%;
                    background: transparent;
                }
                .coral-viewer-loading {
                    display: flex;
                    width: 100%;
                    height: 100%;
                    align-items: center;
                    justify-content: center;
                    color: #9ca3af;
                }
                .coral-viewer-hint {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: 1px solid #1f2937;
                    border-bottom: none;
                    padding: 0.5rem;
                    color: #9ca3af;
                    font-size: 0.75rem;
                }
                .coral-viewer-hint p { margin: 0; }
                .coral-viewer-details {
                    border: 1px solid #1f2937;
                    border-radius: 0 0 8px 8px;
                    background: #111827;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }
                .coral-viewer-badges {
                    display: flex;
                    justify-content: space-between;
                    gap: 0.5rem;
                    flex-wrap: wrap;
                }
                .location-badge, .status-badge {
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                }
                .location-badge {
                    background: #1f2937;
                    color: #2dd4bf;
                }
                .status-badge.critical {
                    background: rgba(127, 29, 29, 0.5);
                    color: #fca5a5;
                }
                .status-badge.threatened {
                    background: rgba(113, 63, 18, 0.5);
                    color: #fde047;
                }
                .gallery-diversity {
                    margin-top: 4rem;
                    border: 1px solid #1f2937;
                    border-radius: 8px;
                    background: #111827;
                    padding: 1.5rem;
                    color: #d1d5db;
                }
                .gallery-diversity h2 {
                    text-align: center;
                    color: #fff;
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_species_with_distinct_models() {
        let mut paths: Vec<&str> = CORAL_SPECIES.iter().map(|c| c.model_path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 3);
        let ids: Vec<u32> = CORAL_SPECIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn status_badges_differ_by_severity() {
        assert_eq!(CORAL_SPECIES[0].status.label(), "Critically Endangered");
        assert_eq!(CORAL_SPECIES[1].status.label(), "Near Threatened");
        assert_ne!(
            ConservationStatus::CriticallyEndangered.badge_class(),
            ConservationStatus::NearThreatened.badge_class()
        );
    }

    #[test]
    fn camera_orbit_matches_position() {
        let settings = VIEWER_SETTINGS;
        let radius = settings.camera_distance();
        assert!((radius - 102.2).abs() < 0.1);
        assert_eq!(settings.camera_orbit(), "45.0deg 12.0deg 102.2m");
        assert_eq!(settings.field_of_view(), "30deg");
        assert_eq!(settings.min_camera_orbit(), "auto auto 1m");
        assert_eq!(settings.max_camera_orbit(), "auto auto 175m");
    }

    #[test]
    fn camera_at_origin_falls_back_to_min_distance() {
        let settings = ViewerSettings {
            camera_position: [0.0, 0.0, 0.0],
            ..VIEWER_SETTINGS
        };
        assert_eq!(settings.camera_orbit(), "0deg 90deg 1m");
    }
}
