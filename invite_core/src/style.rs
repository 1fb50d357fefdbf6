pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Pinyon+Script&family=Cormorant+Garamond:ital@0;1&display=swap');
* {
	--page-background: #efe7df;
	--hero-background: #f3ebe4;
	--main-text: #2a2a2a;
	--card-background: rgba(255, 255, 255, 0.8);
	--card-border: rgba(0, 0, 0, 0.05);
	--rule: rgba(163, 163, 163, 0.4);
	box-sizing: border-box;
	color: var(--main-text);
}
body {
	margin: 0;
	background-color: var(--page-background);
	font-family: "Cormorant Garamond", Georgia, serif;
}
::selection {
	background-color: black;
	color: white;
}
.script {
	font-family: "Pinyon Script", cursive;
}
.serif-italic {
	font-family: "Cormorant Garamond", Georgia, serif;
	font-style: italic;
}
section.narrow {
	max-width: 32rem;
	margin: 0 auto;
	padding: 0 1.25rem 2rem 1.25rem;
}
.card {
	background-color: var(--card-background);
	backdrop-filter: blur(4px);
	border-radius: 1rem;
	border: 1px solid var(--card-border);
	box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
	padding: 1.5rem;
}
.photo {
	width: 100%;
	border-radius: 0.75rem;
	box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.outline-button {
	display: inline-block;
	border: 1px solid var(--main-text);
	border-radius: 0.375rem;
	text-decoration: none;
	transition: 0.2s linear;
}
.outline-button:hover {
	background-color: black;
	color: white;
	transition: 0.2s linear;
}
"#;

pub static HERO_STYLE: &str = r"
#hero {
	position: relative;
	min-height: 92vh;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: var(--hero-background);
	overflow: hidden;
}
#hero-monogram {
	position: absolute;
	top: 1.5rem;
	width: 100%;
	text-align: center;
	font-size: 1.875rem;
	font-style: italic;
	letter-spacing: 0.1em;
	user-select: none;
}
#hero-body {
	max-width: 24rem;
	width: 92%;
	margin: 0 auto;
}
#hero-panels {
	position: relative;
	height: 64vh;
	display: grid;
	grid-template-columns: repeat(3, 1fr);
	gap: 1rem;
}
.hero-panel {
	position: relative;
	border-radius: 0.375rem;
	overflow: hidden;
	box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
	opacity: 0;
	animation: panel-rise 0.9s ease-out forwards;
}
.hero-panel > div {
	position: absolute;
	inset: 0;
	background-size: cover;
}
@keyframes panel-rise {
	from {
		opacity: 0;
		transform: translateY(80px);
	}
	to {
		opacity: 1;
		transform: translateY(0);
	}
}
#hero-names {
	pointer-events: none;
	position: absolute;
	inset: 0;
	display: flex;
	align-items: center;
	justify-content: center;
}
#hero-names > div {
	position: relative;
	color: white;
	text-shadow: 0 1px 2px rgba(0, 0, 0, 0.5);
	font-size: 3.75rem;
	user-select: none;
	rotate: -2deg;
}
#hero-names * {
	color: white;
}
#hero-left-name {
	position: absolute;
	left: -0.5rem;
	top: -4rem;
}
#hero-right-name {
	position: absolute;
	right: 0.5rem;
	top: 4rem;
}
#hero-date {
	margin-top: 1.5rem;
	text-align: center;
	letter-spacing: 0.35em;
	font-size: 0.875rem;
}
#hero-date > hr {
	margin: 0.5rem auto 0 auto;
	width: 6rem;
	border: none;
	height: 1px;
	background-color: var(--rule);
}
";

pub static SECTIONS_STYLE: &str = r"
#intro {
	margin-top: -2rem;
	padding-bottom: 3rem;
}
#intro-text {
	text-align: center;
	text-transform: uppercase;
	letter-spacing: 0.025em;
	line-height: 1.6;
	font-size: 25px;
}
#countdown {
	margin-top: 2rem;
	text-align: center;
}
#countdown-title {
	font-size: 1.125rem;
	margin-bottom: 0.5rem;
}
#countdown-digits {
	display: flex;
	align-items: flex-start;
	justify-content: center;
	gap: 0.75rem;
}
.countdown-unit {
	display: flex;
	flex-direction: column;
	align-items: center;
}
.countdown-value, .countdown-separator {
	font-family: monospace;
	font-size: 1.25rem;
}
.countdown-label {
	margin-top: 0.5rem;
	font-size: 10px;
	letter-spacing: 0.3em;
	text-transform: uppercase;
	opacity: 0.7;
}
#blessing h2 {
	text-align: center;
	font-size: 1.5rem;
	margin: 0 0 1rem 0;
}
#parents {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 1.5rem;
	text-align: center;
	font-size: 0.875rem;
}
.parents-title {
	font-weight: 600;
	letter-spacing: 0.025em;
}
#ceremony .card > div {
	display: flex;
	align-items: flex-start;
	gap: 1rem;
}
#ceremony-venue {
	font-weight: 700;
	letter-spacing: 0.025em;
}
#ceremony-address {
	font-size: 0.75rem;
	opacity: 0.7;
}
#ceremony-time {
	margin-top: 0.25rem;
	font-size: 0.875rem;
}
#ceremony .outline-button {
	margin-top: 0.75rem;
	padding: 0.5rem 1rem;
	font-size: 0.875rem;
}
#program h3 {
	text-align: center;
	font-size: 1.5rem;
	margin: 0 0 1.5rem 0;
}
.timeline-item {
	display: grid;
	grid-template-columns: 2fr 1fr 2fr;
	align-items: start;
	gap: 1rem;
	margin-bottom: 0.75rem;
}
.timeline-item.left {
	text-align: right;
}
.timeline-item.right {
	text-align: left;
}
.timeline-time {
	font-weight: 600;
}
.timeline-title {
	font-size: 0.875rem;
	opacity: 0.7;
}
.timeline-marker {
	display: flex;
	flex-direction: column;
	align-items: center;
}
.timeline-dot {
	width: 0.5rem;
	height: 0.5rem;
	border-radius: 50%;
	background-color: rgba(0, 0, 0, 0.7);
}
.timeline-line {
	width: 2px;
	height: 4rem;
	background-color: rgba(0, 0, 0, 0.2);
}
.timeline-icon {
	opacity: 0.7;
}
#dress-code {
	text-align: center;
}
#dress-code-title {
	font-weight: 600;
	letter-spacing: 0.025em;
	margin-bottom: 0.5rem;
}
#swatches {
	display: flex;
	align-items: center;
	justify-content: center;
	gap: 1rem;
	margin-top: 0.75rem;
}
.swatch {
	width: 2rem;
	height: 2rem;
	border-radius: 50%;
	border: 1px solid var(--card-border);
}
#rsvp {
	text-align: center;
}
#rsvp-title {
	font-size: 1.5rem;
}
#rsvp .outline-button {
	margin-top: 1rem;
	padding: 0.75rem 1.5rem;
}
.note {
	font-size: 0.875rem;
	opacity: 0.8;
}
#closing {
	padding-bottom: 5rem;
	text-align: center;
}
#closing .photo {
	margin-bottom: 1.5rem;
}
#closing-thanks {
	text-transform: uppercase;
	letter-spacing: 0.025em;
	font-size: 0.875rem;
}
#closing-monogram {
	font-size: 1.5rem;
	font-style: italic;
}
#footer {
	position: fixed;
	bottom: 0;
	left: 0;
	right: 0;
	background-color: black;
	font-size: 0.75rem;
	padding: 0.5rem 1rem;
	display: flex;
	align-items: center;
	justify-content: space-between;
}
#footer * {
	color: white;
}
#load-error {
	max-width: 32rem;
	margin: 20vh auto;
	text-align: center;
}
";
