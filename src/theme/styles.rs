//! Global CSS styles for Keepsake.
//!
//! Palette variables come from `palette_css()`; everything else lives here.
//! All motion is CSS: components only set per-element parameters.

pub const GLOBAL_STYLES: &str = r#"
/* === Typography & Timing === */
:root {
  --font-script: 'Dancing Script', cursive, 'Roboto', 'Helvetica', 'Arial', sans-serif;
  --font-body: 'Roboto', 'Helvetica', 'Arial', sans-serif;

  --radius-card: 16px;
  --radius-photo: 8px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-script);
  background: var(--lavender-blush);
  color: var(--text-primary);
  min-height: 100vh;
  overflow-x: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
}

.card-unavailable {
  padding: 4rem 2rem;
  text-align: center;
  color: var(--deep-pink);
  font-size: 1.5rem;
}

/* === Page === */
.card-page {
  position: relative;
  min-height: 100vh;
  padding: 2rem 0;
  background: linear-gradient(45deg, var(--misty-rose) 30%, var(--lavender-blush) 90%);
  overflow: hidden;
}

.card-container {
  position: relative;
  z-index: 1;
  max-width: 900px;
  margin: 0 auto;
  padding: 0 1.5rem;
  text-align: center;
}

.card-header {
  padding: 2rem 0;
  animation: rise-in 0.5s ease both;
}

.card-title {
  color: var(--hot-pink);
  font-size: 3.75rem;
  font-weight: bold;
  text-shadow: 2px 2px 4px var(--pink-glow);
}

.card-footer {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  margin-top: 2rem;
}

/* === Section Card === */
.section-card {
  margin-bottom: 3rem;
  padding: 24px;
  background: var(--card-surface);
  border-radius: var(--radius-card);
  box-shadow: 0 4px 8px rgba(255, 105, 180, 0.1);
  animation: rise-in 0.5s ease both;
}

.section-title {
  color: var(--accent, var(--hot-pink));
  font-size: 2.5rem;
  font-weight: bold;
  margin-bottom: 1rem;
}

.section-body {
  font-family: var(--font-body);
  font-size: 1.15rem;
  line-height: 1.7;
  color: var(--text-primary);
  max-width: 40rem;
  margin: 0 auto 1.5rem;
}

/* === Buttons === */
.btn-next {
  padding: 0.75rem 2.5rem;
  border: none;
  border-radius: 999px;
  background: var(--hot-pink);
  color: white;
  font-size: 1.4rem;
  font-weight: bold;
  box-shadow: 0 4px 12px var(--pink-glow);
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn-next:hover:not(:disabled) {
  background: var(--deep-pink);
  transform: translateY(-2px);
}

.btn-next:disabled {
  opacity: 0.5;
  cursor: default;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.85);
  color: var(--hot-pink);
  font-size: 1.75rem;
  line-height: 1;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.icon-btn:hover {
  background: var(--hot-pink);
  color: white;
}

.btn-ghost {
  padding: 0.7rem 2.2rem;
  border: 2px solid var(--hot-pink);
  border-radius: 999px;
  background: transparent;
  color: var(--hot-pink);
  font-size: 1.2rem;
  cursor: pointer;
}

.btn-ghost:hover {
  background: var(--light-pink);
}

/* === Progress Dots === */
.progress-dots {
  display: flex;
  gap: 0.6rem;
}

.progress-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--pink);
  opacity: 0.5;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.progress-dot.visited {
  opacity: 0.8;
}

.progress-dot.current {
  opacity: 1;
  transform: scale(1.35);
}

/* === Pills === */
.pill-group {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
}

.pill {
  padding: 0.3rem 0.9rem;
  border: 1px solid var(--light-pink);
  border-radius: 999px;
  background: white;
  color: var(--hot-pink);
  font-family: var(--font-body);
  font-size: 0.85rem;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.pill:hover {
  border-color: var(--hot-pink);
}

.pill.selected {
  background: var(--hot-pink);
  border-color: var(--hot-pink);
  color: white;
}

/* === Gallery === */
.photo-gallery {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.gallery-controls {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.carousel {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}

.carousel-frame {
  width: 80%;
  max-width: 560px;
  border-radius: var(--radius-card);
  overflow: hidden;
  cursor: grab;
  user-select: none;
  -webkit-user-select: none;
  transition: transform var(--transition-normal);
}

.carousel-frame.dragging {
  cursor: grabbing;
  transition: none;
}

.carousel-img {
  display: block;
  width: 100%;
  max-height: 360px;
  object-fit: cover;
  border-radius: var(--radius-photo);
  pointer-events: none;
  animation: fade-in var(--transition-slow) both;
}

.carousel-meta {
  text-align: center;
}

.carousel-footer {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  margin-top: 0.5rem;
}

.photo-caption {
  color: var(--hot-pink);
  font-size: 1.6rem;
  font-weight: bold;
}

.photo-date {
  color: var(--text-muted);
  font-style: italic;
  font-size: 1.2rem;
}

.photo-counter {
  font-family: var(--font-body);
  color: var(--text-muted);
  font-size: 0.9rem;
}

.photo-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 200px;
  background: var(--lavender-blush);
  color: var(--light-pink);
  font-size: 4rem;
  border-radius: var(--radius-photo);
}

/* === Timeline === */
.timeline {
  position: relative;
  padding: 20px 0;
}

.timeline::before {
  content: '';
  position: absolute;
  left: 50%;
  top: 0;
  bottom: 0;
  width: 2px;
  background: var(--hot-pink);
  transform: translateX(-50%);
}

.timeline-item {
  position: relative;
  display: flex;
  margin: 40px 0;
  animation: rise-in 0.5s ease both;
}

.timeline-item::before {
  content: '';
  position: absolute;
  left: 50%;
  top: 50%;
  width: 20px;
  height: 20px;
  border-radius: 50%;
  background: var(--hot-pink);
  transform: translate(-50%, -50%);
}

.timeline-item.left { justify-content: flex-start; }
.timeline-item.right { justify-content: flex-end; }

.timeline-card {
  width: 44%;
  padding: 20px;
  background: rgba(255, 255, 255, 0.9);
  border-radius: var(--radius-card);
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
  cursor: zoom-in;
}

.timeline-img {
  width: 100%;
  max-height: 300px;
  object-fit: cover;
  border-radius: var(--radius-photo);
  margin-bottom: 16px;
  transition: transform var(--transition-slow);
}

.timeline-img:hover {
  transform: scale(1.05);
}

@media (max-width: 600px) {
  .timeline::before,
  .timeline-item::before {
    left: 20px;
  }

  .timeline-item.left,
  .timeline-item.right {
    justify-content: flex-start;
    padding-left: 50px;
  }

  .timeline-card {
    width: 100%;
    text-align: left;
  }

  .card-title {
    font-size: 2.5rem;
  }
}

/* === Fullscreen === */
.fullscreen-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  background: rgba(40, 10, 25, 0.92);
  outline: none;
  animation: fade-in var(--transition-normal) both;
}

.fullscreen-figure {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  max-width: 80vw;
}

.fullscreen-img {
  max-width: 80vw;
  max-height: 80vh;
  object-fit: contain;
  border-radius: var(--radius-photo);
}

.fullscreen-figure figcaption {
  display: flex;
  flex-direction: column;
  color: white;
}

.fullscreen-figure .photo-date {
  color: var(--pink);
}

.close-btn {
  position: absolute;
  top: 1.5rem;
  right: 1.5rem;
}

/* === Gift Box === */
.gift-stage {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 2rem 0;
}

.gift-box {
  position: relative;
  width: 120px;
  height: 120px;
  border: none;
  background: transparent;
  animation: wiggle 2s ease-in-out infinite;
}

.gift-box.opened {
  animation: none;
  cursor: default;
}

.gift-body {
  position: absolute;
  bottom: 0;
  left: 10px;
  width: 100px;
  height: 80px;
  background: var(--hot-pink);
  border-radius: 6px;
}

.gift-lid {
  position: absolute;
  top: 16px;
  left: 0;
  width: 120px;
  height: 28px;
  background: var(--deep-pink);
  border-radius: 6px;
  z-index: 2;
  transition: transform var(--transition-slow);
}

.gift-ribbon {
  position: absolute;
  top: 16px;
  left: 52px;
  width: 16px;
  height: 104px;
  background: var(--gold);
  z-index: 3;
  transition: transform var(--transition-slow);
}

.gift-box.opened .gift-lid {
  transform: translateY(-40px) rotate(-18deg);
}

.gift-box.opened .gift-ribbon {
  transform: translateY(-40px) scaleY(0.3);
}

.gift-hint {
  font-family: var(--font-body);
  color: var(--text-muted);
  font-size: 0.9rem;
}

.gift-message {
  color: var(--deep-pink);
  font-size: 1.8rem;
  font-weight: bold;
  animation: rise-in 0.6s ease both;
}

.sparkle-burst {
  position: absolute;
  top: 40%;
  left: 50%;
  width: 0;
  height: 0;
  pointer-events: none;
}

.sparkle {
  position: absolute;
  border-radius: 50%;
  box-shadow: 0 0 6px var(--gold);
  animation: sparkle-burst 1.2s ease-out both;
}

/* === Signatures === */
.signatures {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.signatures-from {
  color: var(--hot-pink);
  font-size: 2.1rem;
  font-weight: bold;
  margin-bottom: 1rem;
}

.signature {
  color: var(--hot-pink);
  font-size: 1.6rem;
  font-weight: bold;
  animation: rise-in 0.5s ease both;
}

/* === Celebration Banner === */
.celebration-banner {
  position: fixed;
  top: 2rem;
  left: 50%;
  z-index: 40;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 2.5rem;
  background: white;
  border-radius: 999px;
  box-shadow: 0 8px 24px var(--pink-glow);
  transform: translateX(-50%);
  animation: banner-drop 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

.celebration-text {
  color: var(--deep-pink);
  font-size: 2rem;
  font-weight: bold;
}

.celebration-heart {
  color: var(--hot-pink);
  font-size: 1.75rem;
  animation: pulse 1s ease-in-out infinite;
}

/* === Particle Layers === */
.heart-layer,
.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.heart-layer { z-index: 0; }
.confetti-layer { z-index: 30; }

.floating-heart {
  position: absolute;
  bottom: -3rem;
  animation: float-up 8s linear infinite;
}

.confetti-piece {
  position: absolute;
  border-radius: 2px;
  animation: confetti-fall 4s ease-in both;
}

/* === Keyframes === */
@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes float-up {
  0% { transform: translateY(0) rotate(0deg); opacity: 0; }
  10% { opacity: 0.7; }
  90% { opacity: 0.7; }
  100% { transform: translateY(-110vh) rotate(20deg); opacity: 0; }
}

@keyframes confetti-fall {
  0% { transform: translateY(0) rotate(var(--spin, 0deg)); opacity: 1; }
  100% { transform: translateY(115vh) rotate(calc(var(--spin, 0deg) + 720deg)); opacity: 0.8; }
}

@keyframes sparkle-burst {
  0% { transform: translate(0, 0) scale(0.2); opacity: 1; }
  70% { opacity: 1; }
  100% { transform: translate(var(--dx), var(--dy)) scale(1); opacity: 0; }
}

@keyframes wiggle {
  0%, 100% { transform: rotate(0deg); }
  10% { transform: rotate(-6deg); }
  20% { transform: rotate(6deg); }
  30% { transform: rotate(0deg); }
}

@keyframes banner-drop {
  from { opacity: 0; transform: translate(-50%, -80px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.2); }
}
"#;
