use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::catalyst_card::{CatalystCard, InfoTile};
use crate::components::nav::{NavBar, scroll_to_section};
use crate::components::pipeline_diagram::AIServicePipelineDiagram;
use crate::components::roi_chart::ROIComparisonChart;
use crate::components::scene::{SceneCanvas, SceneKind};
use crate::components::security_diagram::SecurityArchitectureDiagram;
use crate::content::{ABOUT_TILES, CATALYSTS, hero_network};

fn failure_notice(title: &str, errors: impl IntoIterator<Item = String>) -> String {
	let reasons: Vec<String> = errors.into_iter().collect();
	format!("{title} unavailable: {}", reasons.join("; "))
}

/// Confines a diagram's configuration error to its own slot on the page.
#[component]
fn DiagramBoundary(title: &'static str, children: Children) -> impl IntoView {
	view! {
		<ErrorBoundary fallback=move |errors| {
			view! {
				<div class="diagram-error" role="alert">
					{move || {
						failure_notice(
							title,
							errors.get().into_iter().map(|(_, e)| e.to_string()),
						)
					}}
				</div>
			}
		}>{children()}</ErrorBoundary>
	}
}

#[component]
fn Hero() -> impl IntoView {
	let network = Signal::derive(hero_network);

	view! {
		<header class="hero">
			<div class="hero-scene">
				<SceneCanvas kind=SceneKind::Hero data=network />
			</div>
			<div class="hero-vignette" />

			<div class="container hero-content">
				<div class="hero-badge">"HumanX 2026 \u{2022} San Francisco"</div>
				<h1>
					"InVelo" <br />
					<span class="hero-subtitle">"Mission-Complete AI Services"</span>
				</h1>
				<p class="hero-lede">
					"INT Inc. builds catalyst tools that solve one problem fast: compliance dashboards, onboarding accelerators, crisis response systems. Then hands you the keys."
					<span class="hero-promise">"No lock-in. No consultant debt. Just outcomes."</span>
				</p>
				<a
					href="#how-it-works"
					class="hero-cta"
					on:click=move |ev: MouseEvent| {
						ev.prevent_default();
						scroll_to_section("how-it-works");
					}
				>
					<span>"See How It Works"</span>
					<span class="hero-cta-arrow">"\u{2193}"</span>
				</a>
			</div>
		</header>
	}
}

#[component]
fn Problem() -> impl IntoView {
	view! {
		<section id="problem" class="section section-white">
			<div class="container split split-4-8">
				<div>
					<div class="eyebrow">"The Problem"</div>
					<h2>"The SaaS Trap"</h2>
					<div class="accent-rule" />
				</div>
				<div class="prose">
					<p>
						<span class="drop-figure">"$21M"</span>
						" Average enterprise waste on underused software licenses annually. Why? Because you're buying long-term platforms for short-term problems."
					</p>
					<p>
						"Agentic AI has changed the math. Tools that used to take months to build now take weeks. The $300B SaaS selloff proved that enterprises are tired of rent-seeking software."
					</p>
					<p class="prose-strong">
						"Enterprises don't need another platform with a 3-year contract. They need the right tool for THIS quarter."
					</p>
				</div>
			</div>
		</section>
	}
}

#[component]
fn HowItWorks() -> impl IntoView {
	view! {
		<section id="how-it-works" class="section section-mist">
			<div class="container split split-even">
				<div>
					<div class="pill">"InVelo Delivery Model"</div>
					<h2>"Build. Use. Retire."</h2>
					<p class="prose">
						"Our " <strong>"Catalyst Builds"</strong>
						" are purpose-built tools designed to deliver measurable results in weeks. We follow a strict pipeline that ends with us "
						<strong>"leaving"</strong> "."
					</p>
					<ul class="checklist">
						<li><strong>"4 Weeks to Live:"</strong> " From discovery to deployment."</li>
						<li><strong>"$5K - $250K:"</strong> " Flat project fees. No hidden \"scale\" costs."</li>
						<li><strong>"You Own The Code:"</strong> " No vendor lock-in. Full data export."</li>
					</ul>
				</div>
				<div>
					<DiagramBoundary title="Managed AI Lifecycle">
						<AIServicePipelineDiagram />
					</DiagramBoundary>
				</div>
			</div>
		</section>
	}
}

#[component]
fn CaseStudy() -> impl IntoView {
	view! {
		<section class="section section-navy">
			<div class="container split split-even">
				<div class="stack">
					<DiagramBoundary title="Zero-Trust Data Venue">
						<SecurityArchitectureDiagram />
					</DiagramBoundary>
					<DiagramBoundary title="The Partnership Advantage">
						<ROIComparisonChart />
					</DiagramBoundary>
				</div>
				<div>
					<div class="pill pill-dark">"Real Results"</div>
					<h2>"From Crisis to Compliance in 6 Weeks"</h2>
					<p class="prose">
						"A healthcare IT firm faced a SOC 2 audit with missing logs. A Big 4 consultant quoted $150K and 3 months."
					</p>
					<p class="prose">
						<strong>"InVelo built a custom compliance dashboard in 3 weeks."</strong>
						" The client passed the audit, paid $25K total, and now owns the tool outright."
					</p>
					<blockquote>
						"\"Compliance-ready from day 1. SOC 2 audit trail built into every catalyst build.\""
					</blockquote>
				</div>
			</div>
		</section>
	}
}

#[component]
fn UseCases() -> impl IntoView {
	let cards = CATALYSTS
		.iter()
		.enumerate()
		.map(|(position, card)| view! { <CatalystCard card=card position=position /> })
		.collect_view();

	view! {
		<section id="use-cases" class="section section-white">
			<div class="container">
				<div class="section-intro">
					<div class="eyebrow">"Catalyst Builds"</div>
					<h2>"Purpose-Built Tools for Real Problems"</h2>
					<p>"Each build solves one problem, proves value fast, and gives you full ownership."</p>
				</div>
				<div class="card-grid">{cards}</div>
			</div>
		</section>
	}
}

#[component]
fn About() -> impl IntoView {
	let tiles = ABOUT_TILES
		.iter()
		.map(|tile| view! { <InfoTile tile=tile /> })
		.collect_view();

	view! {
		<section id="about" class="section section-cream">
			<div class="container split split-even">
				<div>
					<div class="eyebrow">"Our Heritage"</div>
					<h2>"25 Years of Managed Excellence"</h2>
					<div class="prose">
						<p>
							"Founded in the late 90s, " <strong>"INT Inc."</strong>
							" has navigated every major technological shift. InVelo applies that deep operational DNA to the frontier of Artificial Intelligence."
						</p>
						<p>
							"We believe that for AI to be truly transformative, it must be practical. We are not consultants who leave you with a slide deck. We build, we operate, and when the mission is complete, we leave you in control."
						</p>
					</div>
				</div>
				<div class="tile-grid">{tiles}</div>
			</div>
		</section>
	}
}

#[component]
fn WhyInt() -> impl IntoView {
	view! {
		<section id="why-int" class="section section-mist">
			<div class="container split split-5-7">
				<div class="vault-frame">
					<SceneCanvas kind=SceneKind::Vault />
					<div class="vault-caption">"LIVE MONITORING ACTIVE"</div>
				</div>
				<div>
					<div class="eyebrow eyebrow-teal">"The Difference"</div>
					<h2>"Why INT Inc."</h2>
					<p class="prose">
						"Other firms sell you a relationship. We sell you an outcome. 25 years of managed services excellence means we know how to build, operate, AND walk away when the mission is complete."
					</p>
					<p class="prose">"We maintain the plumbing so you can focus on the business value."</p>
					<div class="stat-row">
						<div class="stat">
							<div class="stat-figure">"4 Weeks"</div>
							<p>"Average time to live deployment"</p>
						</div>
						<div class="stat">
							<div class="stat-figure">"25+"</div>
							<p>"Years of Managed Services Excellence"</p>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn Contact() -> impl IntoView {
	view! {
		<section id="contact" class="section section-navy contact">
			<div class="container">
				<h2>"Start a Mission"</h2>
				<p class="prose">
					"Tell us the problem. We'll tell you what we'd build, how long it takes, and what it costs. No pitch deck. No 6-month engagement. Just a plan."
				</p>
				<div class="contact-actions">
					<button class="button-gold">"Schedule Intake Call"</button>
					<a href="https://humanx.co" target="_blank" rel="noreferrer" class="button-ghost">
						"Meet us at HumanX 2026 \u{2192}"
					</a>
				</div>
			</div>
		</section>
	}
}

#[component]
fn Footer() -> impl IntoView {
	view! {
		<footer class="site-footer">
			<div class="container footer-inner">
				<div>
					<div class="footer-brand">
						<span class="brand-i">"I"</span>
						" INT INC."
					</div>
					<p>"We are not consultants. We are partners."</p>
					<p class="footer-small">"InVelo is a service line of INT Inc."</p>
				</div>
				<div class="footer-links">
					<a
						href="https://intinc.com/#about"
						on:click=move |ev: MouseEvent| {
							ev.prevent_default();
							scroll_to_section("about");
						}
					>
						"About"
					</a>
					<a href="#">"Privacy Policy"</a>
					<a href="#">"SOC 2 Report"</a>
					<a href="https://humanx.co" class="footer-accent">"HumanX 2026"</a>
				</div>
			</div>
			<div class="footer-legal">"\u{a9} 2026 INT Inc. All rights reserved. | Lincolnshire, IL"</div>
		</footer>
	}
}

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="page">
			<NavBar />
			<Hero />
			<main>
				<Problem />
				<HowItWorks />
				<CaseStudy />
				<UseCases />
				<About />
				<WhyInt />
				<Contact />
			</main>
			<Footer />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::DiagramError;

	#[test]
	fn failure_notice_names_the_diagram_and_its_errors() {
		let notice = failure_notice(
			"The Partnership Advantage",
			[DiagramError::MissingMetric("cost").to_string()],
		);
		assert_eq!(
			notice,
			"The Partnership Advantage unavailable: no figures for metric cost"
		);
	}

	#[test]
	fn failure_notice_joins_multiple_errors() {
		let notice = failure_notice(
			"Managed AI Lifecycle",
			[
				DiagramError::EmptyStages.to_string(),
				DiagramError::Timer("denied".into()).to_string(),
			],
		);
		assert!(notice.starts_with("Managed AI Lifecycle unavailable: "));
		assert_eq!(notice.matches("; ").count(), 1);
	}
}
