//! The single event page: event details plus the RSVP form.
//!
//! Rendered with [maud](https://maud.lambda.xyz/); every dynamic value is
//! escaped.

pub mod components;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::form::FormState;
use components::{divider, info_chip, rsvp_form, PAGE_CSS};

const TITLE: &str = "Soul Collage";
const TAGLINE: &str = "A journey to Healing, Community, Self\u{2011}Empowerment, and Fun";
const DESCRIPTION: &str = "Come explore the wisdom of your inner self. Soul Collage is a gentle, playful, and powerful process using images to access your intuition and connection with others in a soulful safe space.";

const DATE: &str = "Sept. 12, 2025";
const TIME: &str = "1:00 pm – 4:00 pm";
const COST: &str = "$35 (all materials provided)";

const VENUE: &str = "The Gathering Place";
const STREET: &str = "20255 Willamette Dr.,";
const CITY: &str = "West Linn, OR 97068";
const MAPS_URL: &str = "https://maps.apple.com/?q=20255+Willamette+Dr,+West+Linn,+OR+97068";

const FACILITATOR: &str = "Gail Kempler";
const FACILITATOR_CREDENTIALS: &str = "Licensed Acupuncturist, retired R.N.";
const FACILITATOR_BIO: &str = "Gail brings mindfulness, compassion, deep listening and meditation into each Soul Collage gathering.";

const TIPS: [&str; 3] = [
    "All materials are provided.",
    "Please arrive a few minutes early to settle in.",
    "Wear comfortable clothing—this is a creative, playful workshop.",
];

/// Render the full page for the given form state.
///
/// `year` goes into the footer copyright line.
pub fn render(state: &FormState, year: i32) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) " — RSVP" }
                meta name="description" content=(DESCRIPTION);
                meta property="og:title" content=(TITLE);
                meta property="og:description" content=(DESCRIPTION);
                meta property="og:type" content="website";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    section class="hero" {
                        span class="tagline" { (TAGLINE) }
                        h1 class="title" { (TITLE) }
                        p class="lede" { (DESCRIPTION) }
                        div class="chips" {
                            (info_chip("Date", DATE))
                            (info_chip("Time", TIME))
                            (info_chip("Cost", COST))
                        }
                    }

                    section class="details" {
                        div class="card card-location" {
                            h2 { "Location" }
                            p {
                                span class="place" { (VENUE) }
                                (STREET) br;
                                (CITY)
                            }
                            a class="maps" href=(MAPS_URL) { "Open in Maps" }
                            (divider())
                            h3 { "Facilitator" }
                            p {
                                span class="place" { (FACILITATOR) }
                                (FACILITATOR_CREDENTIALS)
                            }
                            p { (FACILITATOR_BIO) }
                        }

                        div class="card card-rsvp" {
                            h2 { "RSVP" }
                            p { "Reserve your spot below!" }
                            (rsvp_form(&state.draft, &state.status))
                            (divider())
                            ul class="tips" {
                                @for tip in TIPS {
                                    li { (tip) }
                                }
                            }
                        }
                    }
                }
                footer class="footer" {
                    p { "© " (year) " Soul Collage Gathering • West Linn, OR" }
                }
            }
        }
    }
}
