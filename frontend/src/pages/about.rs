use yew::prelude::*;
use web_sys::{HtmlInputElement, Url};
use crate::config;
use crate::simulated::{run_scripted, Generation, StatusAction, UploadStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Mission,
    Team,
    History,
}

impl AboutTab {
    const ALL: [AboutTab; 3] = [AboutTab::Mission, AboutTab::Team, AboutTab::History];

    fn label(self) -> &'static str {
        match self {
            AboutTab::Mission => "Our Mission",
            AboutTab::Team => "Our Team",
            AboutTab::History => "Our History",
        }
    }
}

const COMMITMENTS: [&str; 5] = [
    "Conducting cutting-edge research on coral reef health and resilience",
    "Implementing effective coral restoration techniques in degraded reef areas",
    "Educating communities and visitors about the importance of coral conservation",
    "Advocating for policies that protect marine ecosystems from climate change and pollution",
    "Collaborating with local communities, governments, and other organizations to create sustainable solutions",
];

const VALUES: [(&str, &str); 4] = [
    ("Scientific Integrity", "We base our conservation strategies on rigorous scientific research and evidence-based approaches."),
    ("Community Partnership", "We work alongside local communities, recognizing their knowledge and respecting their connection to marine resources."),
    ("Education & Awareness", "We believe that knowledge is the foundation of conservation and strive to make information accessible to all."),
    ("Sustainable Solutions", "We develop and implement conservation strategies that balance ecological health with human needs."),
];

// (name, role, bio)
const TEAM: [(&str, &str, &str); 5] = [
    ("Dr. James Coral", "Research Director", "Specializes in coral genetics and leads our research initiatives on coral resilience to climate change."),
    ("Sarah Reefman", "Conservation Manager", "Coordinates our restoration projects and works with local communities to implement conservation strategies."),
    ("Miguel Oceano", "Education Coordinator", "Develops our educational programs and leads outreach efforts to schools and community groups."),
    ("Dr. Aisha Waters", "Policy Advisor", "Works with governments and international organizations to advocate for stronger marine protection policies."),
    ("Carlos Marino", "Field Operations", "Leads our diving team and oversees the implementation of underwater conservation activities."),
];

// (heading, subtitle, text)
const HISTORY: [(&str, &str, &str); 6] = [
    ("2010: The Beginning", "Foundation of CoralGuard", "CoralGuard was founded by Dr. Marina Corales after witnessing the devastating effects of coral bleaching in the Caribbean. Starting with a small team of dedicated marine biologists, the organization began documenting coral health and raising awareness about threats to reef ecosystems."),
    ("2013: First Restoration Project", "Florida Keys Coral Nursery", "We established our first coral nursery in the Florida Keys, growing staghorn and elkhorn coral fragments for transplantation to degraded reef areas. This project demonstrated the viability of active restoration as a conservation strategy."),
    ("2015: International Expansion", "Southeast Asia Programs", "CoralGuard expanded its operations to Southeast Asia, partnering with local organizations in Indonesia and the Philippines to implement community-based conservation programs. These initiatives focused on reducing destructive fishing practices and establishing locally managed marine protected areas."),
    ("2018: Research Breakthrough", "Heat-Resistant Coral Strains", "Our research team identified several coral strains with enhanced resistance to thermal stress, a critical discovery for coral conservation in the face of rising ocean temperatures. This research has informed our selective breeding program for restoration projects."),
    ("2020: Educational Initiative", "Launch of Digital Learning Platform", "We launched our comprehensive digital learning platform, providing educational resources about coral reef ecosystems to schools, universities, and the general public. This initiative has reached over 100,000 students worldwide."),
    ("Today: Ongoing Mission", "Global Conservation Efforts", "Today, CoralGuard operates in 12 countries, with over 50 full-time staff and hundreds of volunteers. We continue to expand our research, restoration, and education programs, working tirelessly to protect coral reefs for future generations."),
];

fn upload_button_label(status: UploadStatus, has_image: bool) -> &'static str {
    if status.is_busy() {
        "Uploading..."
    } else if has_image {
        "Change Photo"
    } else {
        "Upload Photo"
    }
}

fn revoke(url: Option<String>) {
    if let Some(url) = url {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke profile image url: {:?}", e);
        }
    }
}

// Object URLs owned by the profile card: the one on screen and the one
// waiting for its simulated upload to finish. Each method hands back the
// URLs that are no longer referenced so the caller can revoke them.
#[derive(Debug, Default)]
struct PhotoUrls {
    shown: Option<String>,
    pending: Option<String>,
}

impl PhotoUrls {
    fn stage(&mut self, url: String) -> Option<String> {
        self.pending.replace(url)
    }

    fn promote(&mut self) -> (Option<String>, Option<String>) {
        match self.pending.take() {
            Some(url) => {
                let retired = self.shown.replace(url.clone());
                (Some(url), retired)
            }
            None => (None, None),
        }
    }

    fn remove_shown(&mut self) -> Option<String> {
        self.shown.take()
    }

    fn release_all(&mut self) -> Vec<String> {
        self.shown.take().into_iter().chain(self.pending.take()).collect()
    }
}

#[function_component(ProfileCard)]
fn profile_card() -> Html {
    let profile_image = use_state(|| None::<String>);
    let photo_urls = use_mut_ref(PhotoUrls::default);
    let upload = use_reducer(UploadStatus::default);
    let generation = use_state(Generation::default);

    {
        let generation = (*generation).clone();
        let photo_urls = photo_urls.clone();
        use_effect_with_deps(move |_| {
            move || {
                generation.invalidate();
                let released = photo_urls.borrow_mut().release_all();
                for url in released {
                    revoke(Some(url));
                }
            }
        }, ());
    }

    let on_file_change = {
        let profile_image = profile_image.clone();
        let photo_urls = photo_urls.clone();
        let upload = upload.clone();
        let generation = generation.clone();
        Callback::from(move |e: Event| {
            if upload.is_busy() {
                return;
            }
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow picking the same file again later
            input.set_value("");

            let url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(e) => {
                    log::error!("Failed to read selected photo: {:?}", e);
                    return;
                }
            };
            log::debug!("Simulating upload of {}", file.name());
            let superseded = photo_urls.borrow_mut().stage(url);
            revoke(superseded);
            upload.dispatch(StatusAction::Start);

            let finish = {
                let profile_image = profile_image.clone();
                let photo_urls = photo_urls.clone();
                let upload = upload.dispatcher();
                move || {
                    let (shown, retired) = photo_urls.borrow_mut().promote();
                    revoke(retired);
                    if shown.is_some() {
                        profile_image.set(shown);
                    }
                    upload.dispatch(StatusAction::Finish);
                }
            };
            let revert = {
                let upload = upload.dispatcher();
                move || upload.dispatch(StatusAction::Revert)
            };
            run_scripted(
                generation.issue(),
                config::UPLOAD_DELAY_MS,
                config::UPLOAD_SUCCESS_DISPLAY_MS,
                finish,
                revert,
            );
        })
    };

    let on_remove = {
        let profile_image = profile_image.clone();
        let photo_urls = photo_urls.clone();
        Callback::from(move |_: MouseEvent| {
            let removed = photo_urls.borrow_mut().remove_shown();
            revoke(removed);
            profile_image.set(None);
        })
    };

    let uploader_class = if upload.is_busy() {
        "upload-trigger busy"
    } else {
        "upload-trigger"
    };

    html! {
        <div class="about-card profile-card">
            <div class="profile-photo">
                {
                    match &*profile_image {
                        Some(src) => html! {
                            <>
                                <img src={src.clone()} alt="Profile" />
                                <button class="profile-remove" onclick={on_remove} aria-label="Remove photo">{"✕"}</button>
                            </>
                        },
                        None => html! {
                            <div class="profile-placeholder">
                                <div class="profile-placeholder-icon">{"⇪"}</div>
                                <p>{"Upload your profile photo"}</p>
                                <p class="about-muted">{"Recommended size: 400x400px"}</p>
                            </div>
                        },
                    }
                }
            </div>

            <div class="profile-body">
                <label for="profile-upload" class="upload-label">
                    <div class={uploader_class}>
                        {
                            if upload.is_busy() {
                                html! { <><span class="spinner"></span>{"Uploading..."}</> }
                            } else {
                                html! { {upload_button_label(*upload, profile_image.is_some())} }
                            }
                        }
                    </div>
                    <input
                        id="profile-upload"
                        type="file"
                        accept="image/*"
                        class="sr-only"
                        onchange={on_file_change}
                        disabled={upload.is_busy()}
                    />
                </label>

                {
                    if *upload == UploadStatus::Success {
                        html! { <div class="upload-success">{"✓ Photo uploaded successfully!"}</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="profile-info">
                    <h3>{"Dr. Marina Corales"}</h3>
                    <p class="about-muted">{"Marine Biologist & Founder"}</p>
                    <p>
                        {"With over 15 years of experience in marine conservation, Dr. Corales has led numerous coral restoration projects across the globe and is dedicated to protecting these vital ecosystems."}
                    </p>
                    <p class="about-muted">{"Contact Information:"}</p>
                    <p>{"marina@coralguard.org"}</p>
                </div>
            </div>
        </div>
    }
}

fn mission_tab() -> Html {
    html! {
        <div class="about-card">
            <h2>{"Our Mission"}</h2>
            <p>
                {"At CoralGuard, our mission is to protect and restore coral reef ecosystems through innovative conservation strategies, community engagement, and scientific research. We believe that healthy coral reefs are essential for marine biodiversity, coastal protection, and sustainable livelihoods."}
            </p>
            <p>{"We are committed to:"}</p>
            <ul class="about-list">
                { for COMMITMENTS.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
            <p>
                {"Through these efforts, we aim to ensure that coral reefs continue to thrive for generations to come, supporting the countless species that depend on them and the human communities that benefit from their services."}
            </p>
            <h3>{"Our Values"}</h3>
            <div class="about-grid two">
                { for VALUES.iter().map(|(title, text)| html! {
                    <div class="about-tile">
                        <h4>{*title}</h4>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn team_tab() -> Html {
    html! {
        <div class="about-card">
            <h2>{"Our Team"}</h2>
            <div class="about-grid three">
                { for TEAM.iter().map(|(name, role, bio)| html! {
                    <div class="about-tile">
                        <img class="team-photo" src={format!("{}?height=200&width=200", config::PLACEHOLDER_IMAGE)} alt="Team Member" />
                        <h4>{*name}</h4>
                        <p class="team-role">{*role}</p>
                        <p>{*bio}</p>
                    </div>
                }) }
                <div class="about-tile hiring">
                    <div class="team-photo join">{"Join Our Team"}</div>
                    <h4>{"We're Hiring!"}</h4>
                    <p class="team-role">{"Multiple Positions"}</p>
                    <p>{"Passionate about coral conservation? Check our careers page for current openings."}</p>
                </div>
            </div>
        </div>
    }
}

fn history_tab() -> Html {
    html! {
        <div class="about-card">
            <h2>{"Our History"}</h2>
            <div class="timeline">
                { for HISTORY.iter().map(|(heading, subtitle, text)| html! {
                    <div class="timeline-entry">
                        <div class="timeline-dot"></div>
                        <h3>{*heading}</h3>
                        <p class="team-role">{*subtitle}</p>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let active_tab = use_state(|| AboutTab::Mission);

    let tab_content = match *active_tab {
        AboutTab::Mission => mission_tab(),
        AboutTab::Team => team_tab(),
        AboutTab::History => history_tab(),
    };

    html! {
        <main class="page about-page">
            <div class="page-intro">
                <h1>{"About Us"}</h1>
                <p>{"Learn about our mission to protect and preserve coral reef ecosystems around the world."}</p>
            </div>

            <div class="about-layout">
                <aside class="about-sidebar">
                    <ProfileCard />
                </aside>

                <section class="about-content">
                    <div class="about-tabs" role="tablist">
                        { for AboutTab::ALL.iter().map(|tab| {
                            let tab = *tab;
                            let onclick = {
                                let active_tab = active_tab.clone();
                                Callback::from(move |_: MouseEvent| active_tab.set(tab))
                            };
                            html! {
                                <button
                                    role="tab"
                                    class={classes!("about-tab", (*active_tab == tab).then(|| "active"))}
                                    {onclick}
                                >
                                    {tab.label()}
                                </button>
                            }
                        }) }
                    </div>
                    {tab_content}
                </section>
            </div>
            <style>
                {r#"
                .about-layout {
                    display: grid;
                    gap: 3rem;
                    grid-template-columns: minmax(260px, 1fr) 2fr;
                }
                @media (max-width: 768px) {
                    .about-layout { grid-template-columns: 1fr; }
                }
                .about-sidebar > div {
                    position: sticky;
                    top: 6rem;
                }
                .about-card {
                    border: 1px solid #1f2937;
                    border-radius: 8px;
                    background: #111827;
                    padding: 1.5rem;
                    color: #d1d5db;
                }
                .about-card h2, .about-card h3, .about-card h4 { color: #fff; }
                .about-muted {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .profile-card { padding: 0; overflow: hidden; }
                .profile-photo {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    background: #1f2937;
                }
                .profile-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .profile-remove {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.7);
                    color: #fff;
                    padding: 0.25rem 0.5rem;
                    cursor: pointer;
                }
                .profile-placeholder {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    text-align: center;
                    padding: 1.5rem;
                }
                .profile-placeholder-icon {
                    border-radius: 50%;
                    background: #374151;
                    padding: 1rem 1.25rem;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .profile-body { padding: 1.5rem; }
                .upload-label { display: block; margin-bottom: 1rem; }
                .upload-trigger {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: 1px solid #374151;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    background: rgba(19, 78, 74, 0.3);
                    color: #2dd4bf;
                    cursor: pointer;
                }
                .upload-trigger.busy {
                    background: #1f2937;
                    color: #9ca3af;
                    cursor: progress;
                }
                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid #6b7280;
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .upload-success {
                    border-radius: 6px;
                    background: rgba(20, 83, 45, 0.2);
                    color: #4ade80;
                    padding: 0.5rem;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .about-tabs {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    background: #111827;
                    border-radius: 6px;
                    margin-bottom: 2rem;
                    padding: 0.25rem;
                }
                .about-tab {
                    border: none;
                    border-radius: 4px;
                    background: transparent;
                    color: #9ca3af;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .about-tab.active {
                    background: #000;
                    color: #fff;
                }
                .about-list {
                    margin-left: 1.5rem;
                    list-style: disc;
                }
                .about-grid {
                    display: grid;
                    gap: 1rem;
                }
                .about-grid.two { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
                .about-grid.three { grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); }
                .about-tile {
                    border-radius: 8px;
                    background: #1f2937;
                    padding: 1rem;
                    font-size: 0.875rem;
                }
                .about-tile h4 { margin-bottom: 0.5rem; }
                .about-grid.two .about-tile h4 { color: #2dd4bf; }
                .about-tile.hiring { text-align: center; }
                .team-photo {
                    width: 100%;
                    aspect-ratio: 1 / 1;
                    border-radius: 6px;
                    background: #374151;
                    object-fit: cover;
                    margin-bottom: 0.75rem;
                }
                .team-photo.join {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #9ca3af;
                }
                .team-role {
                    color: #2dd4bf;
                    font-size: 0.875rem;
                }
                .timeline {
                    position: relative;
                    border-left: 1px solid #374151;
                    padding-left: 1.5rem;
                }
                .timeline-entry {
                    position: relative;
                    margin-bottom: 2.5rem;
                }
                .timeline-entry:last-child { margin-bottom: 0; }
                .timeline-dot {
                    position: absolute;
                    left: calc(-1.5rem - 6px);
                    top: 0.4rem;
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    background: #14b8a6;
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
    fn button_label_tracks_upload_state() {
        assert_eq!(upload_button_label(UploadStatus::Idle, false), "Upload Photo");
        assert_eq!(upload_button_label(UploadStatus::Success, true), "Change Photo");
        assert_eq!(upload_button_label(UploadStatus::InProgress, true), "Uploading...");
    }

    #[test]
    fn pending_photo_is_released_on_teardown_mid_upload() {
        let mut urls = PhotoUrls::default();
        assert_eq!(urls.stage("blob:first".to_string()), None);
        // Unmounted before the upload finished
        assert_eq!(urls.release_all(), vec!["blob:first".to_string()]);
        assert!(urls.release_all().is_empty());
    }

    #[test]
    fn finished_upload_retires_previous_photo() {
        let mut urls = PhotoUrls::default();
        urls.stage("blob:first".to_string());
        assert_eq!(urls.promote(), (Some("blob:first".to_string()), None));

        urls.stage("blob:second".to_string());
        assert_eq!(
            urls.promote(),
            (Some("blob:second".to_string()), Some("blob:first".to_string()))
        );
        assert_eq!(urls.promote(), (None, None));
        assert_eq!(urls.release_all(), vec!["blob:second".to_string()]);
    }

    #[test]
    fn removing_the_photo_keeps_a_pending_upload() {
        let mut urls = PhotoUrls::default();
        urls.stage("blob:first".to_string());
        urls.promote();
        urls.stage("blob:second".to_string());
        assert_eq!(urls.remove_shown(), Some("blob:first".to_string()));
        assert_eq!(urls.release_all(), vec!["blob:second".to_string()]);
    }

    #[test]
    fn tabs_default_to_mission_first() {
        assert_eq!(AboutTab::ALL[0], AboutTab::Mission);
        let labels: Vec<&str> = AboutTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Our Mission", "Our Team", "Our History"]);
    }
}
