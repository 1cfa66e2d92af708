use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;
use crate::components::fact_card::FactCard;

// (headline, description, reveal delay in seconds)
const CRISIS_FACTS: [(&str, &str, f64); 3] = [
    ("50%", "of the world's coral reefs have died in the last 30 years", 0.1),
    ("90%", "of coral reefs could be lost by 2050 if we don't act now", 0.2),
    ("25%", "of all marine species depend on coral reefs for survival", 0.3),
];

// (icon, title, text)
const THREATS: [(&str, &str, &str); 4] = [
    ("🌡", "Climate Change", "Rising ocean temperatures cause coral bleaching, where corals expel the algae living in their tissues and turn white. Without these algae, corals lose their primary food source and become more susceptible to disease."),
    ("💧", "Ocean Acidification", "As oceans absorb carbon dioxide from the atmosphere, seawater becomes more acidic. This makes it harder for corals to build their calcium carbonate skeletons, slowing their growth and weakening existing reef structures."),
    ("🌐", "Pollution", "Runoff from agriculture, sewage, and industrial activities introduces harmful nutrients, sediments, and toxins into coastal waters. These pollutants can smother corals, block sunlight, and trigger harmful algal blooms."),
    ("👥", "Human Activities", "Destructive fishing practices, coastal development, and irresponsible tourism directly damage reef structures. Overfishing disrupts the delicate balance of reef ecosystems by removing key species that keep algae growth in check."),
];

// (image alt, title, text)
const SUCCESS_STORIES: [(&str, &str, &str); 3] = [
    ("Coral restoration project", "Coral Restoration in Florida", "Through innovative \"coral gardening\" techniques, scientists have successfully grown and transplanted thousands of coral fragments onto degraded reefs in the Florida Keys."),
    ("Marine protected area", "Palau's Marine Sanctuary", "The Pacific island nation of Palau created one of the world's largest marine protected areas, covering 80% of its maritime territory and banning all extractive activities."),
    ("Community-led conservation", "Community-Led Conservation in Indonesia", "Local communities in Raja Ampat have established a network of locally managed marine areas, resulting in increased fish populations and healthier coral reefs."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <section class="home-hero">
                <video class="home-hero-video" autoplay=true muted=true loop=true playsinline=true>
                    <source src={config::HERO_VIDEO} type="video/mp4" />
                </video>
                <div class="home-hero-shade"></div>
                <div class="home-hero-content">
                    <h1>{"Save Our Coral Reefs"}</h1>
                    <p>
                        {"Coral reefs are the rainforests of the sea, home to 25% of marine species. Join our mission to protect these vital ecosystems before it's too late."}
                    </p>
                    <div class="home-hero-actions">
                        <Link<Route> to={Route::Contact} classes="home-button">
                            {"Take Action Now"}
                        </Link<Route>>
                        <Link<Route> to={Route::About} classes="home-button outline">
                            {"Learn More"}
                        </Link<Route>>
                    </div>
                </div>
                <div class="home-hero-scroll">{"⌄"}</div>
            </section>

            <section class="home-section home-intro">
                <h2>{"Our Oceans Are In Danger"}</h2>
                <p>
                    {"Coral reefs are among the most valuable ecosystems on Earth. They provide food, shelter, and breeding grounds for countless marine species, protect coastlines from storms and erosion, support fishing and tourism industries worth billions of dollars, and hold promise for medical breakthroughs."}
                </p>
                <p>
                    {"Yet today, these magnificent underwater cities face unprecedented threats from climate change, pollution, overfishing, and destructive practices. Without immediate action, we risk losing these treasures forever."}
                </p>
            </section>

            <section class="home-section">
                <h2 class="home-accent">{"The Coral Crisis"}</h2>
                <div class="home-grid three">
                    { for CRISIS_FACTS.iter().map(|(title, description, delay)| html! {
                        <FactCard title={*title} description={*description} delay={*delay} />
                    }) }
                </div>
                <div class="home-center">
                    <Link<Route> to={Route::Quiz} classes="home-button">
                        {"Test Your Knowledge →"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-section">
                <h2>{"Major Threats to Coral Reefs"}</h2>
                <p class="home-lead">
                    {"Understanding the challenges facing coral reefs is the first step toward protecting them."}
                </p>
                <div class="home-grid four">
                    { for THREATS.iter().map(|(icon, title, text)| html! {
                        <div class="home-threat">
                            <div class="home-threat-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-section">
                <h2>{"Explore Coral Reefs in 3D"}</h2>
                <p class="home-lead">
                    {"Interact with detailed 3D models of coral species and reef ecosystems. Learn about their structure, diversity, and the threats they face."}
                </p>
                <div class="home-preview">
                    <img src={config::GALLERY_PREVIEW_IMAGE} alt="3D Coral Reef Gallery Preview" />
                    <div class="home-preview-overlay">
                        <Link<Route> to={Route::Gallery} classes="home-button">
                            {"Enter 3D Gallery"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="home-section">
                <h2>{"Success Stories"}</h2>
                <p class="home-lead">
                    {"Despite the challenges, conservation efforts around the world are making a difference. Here are some inspiring success stories."}
                </p>
                <div class="home-grid three">
                    { for SUCCESS_STORIES.iter().map(|(alt, title, text)| html! {
                        <div class="home-story">
                            <div class="home-story-image">
                                <img src={format!("{}?height=300&width=500", config::PLACEHOLDER_IMAGE)} alt={*alt} />
                            </div>
                            <div class="home-story-body">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                                <a href="#" class="home-story-link">{"Read more →"}</a>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-section home-cta">
                <h2>{"Join the Movement to Save Coral Reefs"}</h2>
                <p>
                    {"Every action counts. Whether it's reducing your carbon footprint, supporting marine conservation organizations, or spreading awareness, you can make a difference in protecting these vital ecosystems."}
                </p>
                <Link<Route> to={Route::Contact} classes="home-button">
                    {"Take the Pledge"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .home {
                    background: #000;
                    color: #fff;
                }
                .home-hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                }
                .home-hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .home-hero-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .home-hero-content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    padding: 0 1rem;
                    text-align: center;
                    animation: homeFadeUp 0.8s ease-out;
                }
                .home-hero-content h1 {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .home-hero-content p {
                    max-width: 48rem;
                    color: #d1d5db;
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }
                .home-hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .home-hero-scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    z-index: 1;
                    transform: translateX(-50%);
                    font-size: 2rem;
                    animation: homeBob 2s ease-in-out infinite;
                }
                @keyframes homeFadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes homeBob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                .home-button {
                    display: inline-block;
                    border: 1px solid #0d9488;
                    border-radius: 6px;
                    background: #0d9488;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .home-button:hover { background: #0f766e; }
                .home-button.outline {
                    background: transparent;
                    color: #0d9488;
                }
                .home-button.outline:hover { background: #042f2e; }
                .home-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    text-align: center;
                }
                .home-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .home-accent { color: #2dd4bf; }
                .home-intro { max-width: 56rem; }
                .home-intro p, .home-lead, .home-cta p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    margin: 0 auto 2rem;
                    max-width: 42rem;
                }
                .home-intro p { max-width: none; }
                .home-grid {
                    display: grid;
                    gap: 2rem;
                    margin-top: 3rem;
                    text-align: left;
                }
                .home-grid.three { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
                .home-grid.four { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
                .home-center { margin-top: 3rem; }
                .home-threat {
                    border-radius: 8px;
                    background: #1f2937;
                    padding: 1.5rem;
                }
                .home-threat-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #134e4a;
                    margin-bottom: 1rem;
                }
                .home-threat h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }
                .home-threat p { color: #d1d5db; }
                .home-preview {
                    position: relative;
                    max-width: 56rem;
                    margin: 3rem auto 0;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    border-radius: 8px;
                }
                .home-preview img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .home-preview-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.6);
                }
                .home-story {
                    overflow: hidden;
                    border: 1px solid #1f2937;
                    border-radius: 8px;
                    background: #111827;
                }
                .home-story-image {
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }
                .home-story-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s;
                }
                .home-story-image img:hover { transform: scale(1.05); }
                .home-story-body { padding: 1.5rem; }
                .home-story-body h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .home-story-body p {
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }
                .home-story-link {
                    color: #2dd4bf;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .home-story-link:hover { text-decoration: underline; }
                .home-cta { max-width: 48rem; }
                "#}
            </style>
        </main>
    }
}
