//! The infographic's eight sections.
//!
//! Copy, icons and colors are static configuration; the only dynamic
//! input is the clock position, which each section turns into its
//! fade-and-slide style. Sections stay mounted while hidden so a seek
//! backwards simply fades them out again.

use crate::components::Icon;
use crate::playback::Playhead;
use crate::timeline::{RevealStyle, Section};
use dioxus::prelude::*;

#[component]
pub fn StorySlides() -> Element {
    let playhead = use_context::<Signal<Playhead>>();
    let position = playhead().position;

    rsx! {
        HeaderSlide { position }
        IntroSlide { position }
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12",
            RequirementCard { position }
            ImplementationCard { position }
            TestingCard { position }
            DeployCard { position }
        }
        SummarySlide { position }
        ClosingSlide { position }
    }
}

#[component]
fn HeaderSlide(position: f64) -> Element {
    let anchor = Section::Header.anchor();
    let style = RevealStyle::at(position, Section::Header).css();

    rsx! {
        header {
            id: "{anchor}",
            class: "text-center mb-4 pt-8 transition-all duration-700",
            style: "{style}",
            h1 { class: "text-5xl md:text-6xl font-bold mb-6 text-teal-700",
                "AI: The Modern Developer's Superpower 🚀"
            }
        }
    }
}

#[component]
fn IntroSlide(position: f64) -> Element {
    let anchor = Section::Intro.anchor();
    let style = RevealStyle::at(position, Section::Intro).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-white/70 rounded-lg p-6 mb-12 max-w-3xl mx-auto shadow-md border border-teal-200 transition-all duration-700",
            style: "{style}",
            p { class: "text-2xl md:text-3xl italic text-teal-800",
                "\"AI has worked its way into every corner of how software gets built.\""
            }
        }
    }
}

#[component]
fn RequirementCard(position: f64) -> Element {
    let anchor = Section::Requirement.anchor();
    let style = RevealStyle::at(position, Section::Requirement).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-white/80 rounded-xl p-6 backdrop-blur-sm border border-teal-200 shadow-md hover:shadow-lg transition-all duration-500",
            style: "{style}",
            div { class: "flex justify-center mb-4",
                div { class: "p-4 bg-gradient-to-br from-teal-400 to-cyan-500 rounded-full shadow-md",
                    Icon { name: "file-search".to_string(), class: "w-14 h-14 text-white".to_string() }
                }
            }
            h2 { class: "text-2xl md:text-3xl font-bold text-center mb-4 text-teal-700",
                "1. Requirements"
            }
            div { class: "space-y-3",
                h3 { class: "text-xl font-semibold text-cyan-600", "What can AI do here?" }
                ul { class: "list-disc list-inside space-y-2 text-lg text-gray-700",
                    li { "Brainstorms ideas at full blaze 🔥" }
                    li { "Sharpens the requirement analysis" }
                    li { "Researches 10x faster than plain web search" }
                    li { "A few seconds of prompting replaces an afternoon of UML drafting" }
                }
            }
        }
    }
}

#[component]
fn ImplementationCard(position: f64) -> Element {
    let anchor = Section::Implementation.anchor();
    let style = RevealStyle::at(position, Section::Implementation).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-white/80 rounded-xl p-6 backdrop-blur-sm border border-sky-200 shadow-md hover:shadow-lg transition-all duration-500",
            style: "{style}",
            div { class: "flex justify-center mb-4",
                div { class: "p-4 bg-gradient-to-br from-sky-400 to-blue-500 rounded-full shadow-md",
                    Icon { name: "code".to_string(), class: "w-14 h-14 text-white".to_string() }
                }
            }
            h2 { class: "text-2xl md:text-3xl font-bold text-center mb-4 text-sky-700",
                "2. Implementation"
            }
            div { class: "space-y-3",
                h3 { class: "text-xl font-semibold text-sky-600", "Back then:" }
                p { class: "text-lg text-gray-700", "Frantically copy-pasting from StackOverflow 🤪" }
                h3 { class: "text-xl font-semibold text-sky-600", "Now:" }
                p { class: "text-lg text-gray-700",
                    "Copilot writes solid code with you, like a senior pair parked at your desk 🚀"
                }
            }
        }
    }
}

#[component]
fn TestingCard(position: f64) -> Element {
    let anchor = Section::Testing.anchor();
    let style = RevealStyle::at(position, Section::Testing).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-white/80 rounded-xl p-6 backdrop-blur-sm border border-amber-200 shadow-md hover:shadow-lg transition-all duration-500",
            style: "{style}",
            div { class: "flex justify-center mb-4",
                div { class: "p-4 bg-gradient-to-br from-amber-400 to-orange-500 rounded-full shadow-md",
                    Icon { name: "test-tube".to_string(), class: "w-14 h-14 text-white".to_string() }
                }
            }
            h2 { class: "text-2xl md:text-3xl font-bold text-center mb-4 text-amber-700",
                "3. Testing"
            }
            div { class: "space-y-3",
                h3 { class: "text-xl font-semibold text-amber-600", "Turbo testing" }
                ul { class: "list-disc list-inside space-y-2 text-lg text-gray-700",
                    li { "Watches logs and code around the clock" }
                    li { "Writes test cases like a machine, never yawns 😴" }
                    li { "Smart test triage buys the whole team coffee breaks ☕" }
                }
            }
        }
    }
}

#[component]
fn DeployCard(position: f64) -> Element {
    let anchor = Section::Deploy.anchor();
    let style = RevealStyle::at(position, Section::Deploy).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-white/80 rounded-xl p-6 backdrop-blur-sm border border-rose-200 shadow-md hover:shadow-lg transition-all duration-500",
            style: "{style}",
            div { class: "flex justify-center mb-4",
                div { class: "p-4 bg-gradient-to-br from-rose-400 to-pink-500 rounded-full shadow-md",
                    Icon { name: "server".to_string(), class: "w-14 h-14 text-white".to_string() }
                }
            }
            h2 { class: "text-2xl md:text-3xl font-bold text-center mb-4 text-rose-700",
                "4. Deploy"
            }
            div { class: "space-y-3",
                h3 { class: "text-xl font-semibold text-rose-600", "The old days:" }
                p { class: "text-lg text-gray-700",
                    "Up all night watching the system like an ex's social feed 👀"
                }
                h3 { class: "text-xl font-semibold text-rose-600", "The 4.0 era:" }
                ul { class: "list-disc list-inside space-y-2 text-lg text-gray-700",
                    li { "AI flags failures before the boss even notices 🕵️" }
                    li { "Overload warnings land before the server meets its ancestors 💀" }
                }
            }
        }
    }
}

#[component]
fn SummarySlide(position: f64) -> Element {
    let anchor = Section::Summary.anchor();
    let style = RevealStyle::at(position, Section::Summary).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-gradient-to-r from-purple-100 to-indigo-100 rounded-xl p-8 mb-12 backdrop-blur-sm border border-purple-200 shadow-md transition-all duration-700",
            style: "{style}",
            h2 { class: "text-3xl md:text-4xl font-bold mb-6 text-center text-purple-700",
                "AI and Dev 4.0: The Big Picture"
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                SummaryCard {
                    icon: "file-search",
                    badge: "from-teal-400 to-cyan-500",
                    accent: "text-teal-700",
                    title: "Requirements",
                    blurb: "Lightning brainstorming, sharp analysis, instant diagrams",
                }
                SummaryCard {
                    icon: "code",
                    badge: "from-sky-400 to-blue-500",
                    accent: "text-sky-700",
                    title: "Implementation",
                    blurb: "From StackOverflow roulette to a senior pair on tap",
                }
                SummaryCard {
                    icon: "test-tube",
                    badge: "from-amber-400 to-orange-500",
                    accent: "text-amber-700",
                    title: "Testing",
                    blurb: "Tireless test writing and smart triage",
                }
                SummaryCard {
                    icon: "server",
                    badge: "from-rose-400 to-pink-500",
                    accent: "text-rose-700",
                    title: "Deploy",
                    blurb: "Failures spotted before anyone gets paged",
                }
            }
            div { class: "mt-6 p-4 bg-white/80 rounded-lg shadow-md border border-purple-200",
                div { class: "flex items-center justify-center gap-3 mb-2",
                    div { class: "p-2 bg-gradient-to-br from-violet-400 to-purple-500 rounded-full shadow-sm",
                        Icon { name: "layers".to_string(), class: "w-6 h-6 text-white".to_string() }
                    }
                    h3 { class: "text-xl font-bold text-purple-700", "What you get overall" }
                }
                ul { class: "grid grid-cols-1 md:grid-cols-3 gap-2 text-gray-700",
                    BenefitItem { text: "Productivity up 10x" }
                    BenefitItem { text: "Far fewer bugs in review" }
                    BenefitItem { text: "Hours back every week" }
                    BenefitItem { text: "Grunt work automated away" }
                    BenefitItem { text: "An always-on brainstorm partner" }
                    BenefitItem { text: "A workflow tuned to you" }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(
    icon: &'static str,
    badge: &'static str,
    accent: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> Element {
    rsx! {
        div { class: "bg-white/80 rounded-lg p-4 shadow-md border border-purple-200",
            div { class: "flex items-center gap-3 mb-2",
                div { class: "p-2 bg-gradient-to-br {badge} rounded-full shadow-sm",
                    Icon { name: icon.to_string(), class: "w-6 h-6 text-white".to_string() }
                }
                h3 { class: "text-xl font-bold {accent}", "{title}" }
            }
            p { class: "text-gray-700", "{blurb}" }
        }
    }
}

#[component]
fn BenefitItem(text: &'static str) -> Element {
    rsx! {
        li { class: "flex items-center gap-2",
            span { class: "text-purple-500", "✓" }
            "{text}"
        }
    }
}

#[component]
fn ClosingSlide(position: f64) -> Element {
    let anchor = Section::CallToAction.anchor();
    let style = RevealStyle::at(position, Section::CallToAction).css();

    rsx! {
        section {
            id: "{anchor}",
            class: "bg-gradient-to-r from-blue-100 to-indigo-100 rounded-xl p-8 mb-8 text-center backdrop-blur-sm border border-blue-200 shadow-md transition-all duration-700",
            style: "{style}",
            h2 { class: "text-2xl md:text-3xl font-bold mb-2 text-blue-600", "Conclusion" }
            p { class: "text-xl md:text-2xl font-semibold text-indigo-700 mb-6",
                "AI now matters to developers the way caffeine and wifi do 🔌☕"
            }
            h2 { class: "text-2xl md:text-3xl font-bold mb-4 mt-8 text-teal-600", "Are you ready?" }
            p { class: "text-xl mb-2 text-gray-700", "How will you fold AI into your own dev life?" }
            p { class: "text-2xl font-bold text-blue-600", "👉 Follow along so you don't miss what's next 👈" }
        }
    }
}
