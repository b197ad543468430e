//! Small HTML fragments composed into the RSVP page.

use maud::{html, Markup};

use crate::form::{FormDraft, FormStatus};

/// Inline CSS for the page. Warm amber palette, one column on phones,
/// location and RSVP cards side by side on wider screens.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--amber-50:#fffbeb;--amber-100:#fef3c7;--amber-200:#fde68a;--amber-300:#fcd34d;--amber-500:#f59e0b;--amber-700:#b45309;--amber-800:#92400e;--amber-900:#78350f;--stone-600:#57534e;--stone-700:#44403c;--stone-800:#292524;--stone-900:#1c1917;--serif:Georgia,"Times New Roman",serif}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--stone-900);background:linear-gradient(to bottom,var(--amber-100),var(--amber-50),var(--amber-100));min-height:100vh}
a{color:var(--amber-900)}

.hero{max-width:64rem;margin:0 auto;padding:4rem 1.5rem 3rem;display:flex;flex-direction:column;align-items:center;text-align:center}
.tagline{display:inline-block;border:1px solid var(--amber-300);background:var(--amber-50);color:var(--amber-800);border-radius:999px;padding:.25rem .75rem;font-size:.75rem;font-weight:500;letter-spacing:.03em}
.title{margin-top:1.5rem;font-family:var(--serif);font-size:3.25rem;font-weight:800;letter-spacing:-.02em;color:var(--amber-900)}
.lede{margin-top:1.5rem;max-width:42rem;font-size:1.125rem;color:var(--stone-700)}
.chips{margin-top:2rem;display:grid;gap:1rem}
.chip{border:1px solid var(--amber-300);background:rgba(255,255,255,.7);border-radius:1rem;padding:.75rem 1rem;text-align:left}
.chip-label{font-size:.75rem;font-weight:600;text-transform:uppercase;letter-spacing:.05em;color:var(--amber-800)}
.chip-value{font-weight:500}

.details{max-width:64rem;margin:0 auto;padding:0 1.5rem 5rem;display:grid;grid-template-columns:1fr;gap:2rem}
.card{border-radius:1rem;padding:1.5rem;border:1px solid rgba(252,211,77,.6)}
.card-location{background:rgba(253,230,138,.5)}
.card-rsvp{background:rgba(255,255,255,.8)}
.card h2{font-family:var(--serif);font-size:1.5rem;font-weight:700;color:var(--amber-900)}
.card h3{font-family:var(--serif);font-size:1.25rem;font-weight:600;color:var(--amber-900)}
.card p{margin-top:.5rem;color:var(--stone-800)}
.place{display:block;font-weight:500}
.maps{display:inline-flex;margin-top:1rem;border:1px solid var(--amber-300);background:rgba(255,255,255,.6);border-radius:.75rem;padding:.5rem 1rem;font-size:.875rem;font-weight:500;text-decoration:none}
.maps:hover{background:#fff}
.divider{height:1px;width:100%;margin:1.5rem 0;background:linear-gradient(to right,transparent,var(--amber-300),transparent)}

.rsvp-form{margin-top:1.5rem;display:grid;grid-template-columns:1fr;gap:1rem}
.field label{display:block;font-size:.875rem;font-weight:500;color:var(--stone-800)}
.field input,.field textarea{margin-top:.25rem;width:100%;border:1px solid #d6d3d1;border-radius:.75rem;background:#fff;padding:.5rem .75rem;font:inherit;color:var(--stone-900)}
.field input:focus,.field textarea:focus{outline:2px solid var(--amber-500);outline-offset:0}
.wide{grid-column:1/-1}
.hp{position:absolute;left:-10000px;width:1px;height:1px;overflow:hidden}
.actions{display:flex;align-items:center;justify-content:space-between;gap:.75rem;margin-top:.5rem}
.submit{border:none;border-radius:1rem;background:var(--amber-700);color:var(--amber-50);padding:.75rem 1.25rem;font:inherit;font-weight:600;cursor:pointer}
.submit:hover{background:var(--amber-800)}
.status{font-size:.875rem;font-weight:500}
.status-success{color:#15803d}
.status-error{color:#b91c1c}
.tips{margin-top:1rem;padding-left:1.5rem;font-size:.875rem;color:var(--stone-700)}

.footer{max-width:64rem;margin:0 auto;padding:0 1.5rem 2.5rem;text-align:center;font-size:.875rem;color:var(--stone-600)}

@media(min-width:640px){
.title{font-size:3.75rem}
.chips{grid-template-columns:repeat(3,1fr)}
.rsvp-form{grid-template-columns:1fr 1fr}
}
@media(min-width:768px){
.details{grid-template-columns:2fr 3fr}
}
"#;

/// Label/value tile shown under the hero text.
pub fn info_chip(label: &str, value: &str) -> Markup {
    html! {
        div class="chip" {
            p class="chip-label" { (label) }
            p class="chip-value" { (value) }
        }
    }
}

pub fn divider() -> Markup {
    html! { div class="divider" {} }
}

/// Outcome line next to the submit button. Renders nothing while idle.
pub fn status_line(status: &FormStatus) -> Markup {
    html! {
        @match status {
            FormStatus::Idle => {}
            FormStatus::Success(message) => {
                p class="status status-success" role="status" { (message) }
            }
            FormStatus::Error(message) => {
                p class="status status-error" role="alert" { (message) }
            }
        }
    }
}

/// The RSVP form, pre-filled from the draft.
///
/// Posts back to the page itself; the `company` input is the honeypot and
/// is kept off-screen and out of the tab order.
pub fn rsvp_form(draft: &FormDraft, status: &FormStatus) -> Markup {
    html! {
        form class="rsvp-form" method="post" {
            div class="field" {
                label for="name" { "Name *" }
                input id="name" name="name" type="text" autocomplete="name" required value=(draft.name);
            }
            div class="field" {
                label for="email" { "Email *" }
                input id="email" name="email" type="email" autocomplete="email" required value=(draft.email);
            }
            div class="field" {
                label for="phone" { "Phone (optional)" }
                input id="phone" name="phone" type="tel" autocomplete="tel" value=(draft.phone);
            }
            div class="field" {
                label for="attendees" { "# Attendees" }
                input id="attendees" name="attendees" type="number" min="1" max="10" value=(draft.attendees);
            }
            div class="field wide" {
                label for="notes" { "Notes" }
                textarea id="notes" name="notes" rows="4" { (draft.notes) }
            }
            div class="hp" aria-hidden="true" {
                label for="company" { "Company" }
                input id="company" name="company" type="text" tabindex="-1" autocomplete="off" value=(draft.company);
            }
            div class="actions wide" {
                button class="submit" type="submit" { "RSVP Now" }
                (status_line(status))
            }
        }
    }
}
