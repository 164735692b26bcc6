//! Global CSS for the gift.
//!
//! Every section sits on glass cards over the active theme's gradient. The
//! theme's accent colors arrive as the `--accent` and `--secondary` custom
//! properties set on `.gift-root`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --accent: #be185d;
  --secondary: #e11d48;

  --glass: rgba(255, 255, 255, 0.1);
  --glass-hover: rgba(255, 255, 255, 0.2);
  --glass-border: rgba(255, 255, 255, 0.3);

  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.8);
  --text-muted: rgba(255, 255, 255, 0.6);
  --text-on-paper: #1f2937;

  --gold: #facc15;

  --font-display: 'Pacifico', 'Brush Script MT', cursive;
  --font-body: 'Poppins', 'Segoe UI', system-ui, sans-serif;

  --radius: 1.5rem;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
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
  font-family: var(--font-body);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

/* === Root === */
.gift-root {
  min-height: 100vh;
  position: relative;
  transition: background var(--transition-slow);
}

.gift-root.theme-changing {
  filter: saturate(1.4) brightness(1.1);
}

.gift-main {
  position: relative;
  z-index: 1;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1rem 4rem;
}

/* === Sections === */
.section {
  padding: 3rem 0;
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 0.5rem;
  text-shadow: 0 2px 12px rgba(0, 0, 0, 0.2);
}

.section-subtitle {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.glass-card {
  background: var(--glass);
  backdrop-filter: blur(12px);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  padding: 1.5rem;
  transition: background var(--transition-normal);
}

.glass-card:hover {
  background: var(--glass-hover);
}

.grid-2 {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 1.5rem;
}

.grid-3 {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
}

.row {
  display: flex;
  gap: 0.75rem;
  align-items: center;
  flex-wrap: wrap;
}

.row.spread {
  justify-content: space-between;
}

.stack {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.empty-state {
  text-align: center;
  color: var(--text-muted);
  padding: 2rem 1rem;
  font-style: italic;
}

.notice {
  background: rgba(255, 255, 255, 0.25);
  border-radius: 1rem;
  padding: 0.75rem 1rem;
  text-align: center;
  animation: fade-in var(--transition-normal);
}

/* === Buttons === */
.btn {
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
  font-weight: 600;
  color: var(--text-primary);
  background: var(--glass-hover);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
  white-space: nowrap;
}

.btn:hover:not(:disabled) {
  transform: scale(1.05);
  box-shadow: 0 6px 20px rgba(0, 0, 0, 0.2);
}

.btn-primary {
  background: var(--accent);
}

.btn-secondary {
  background: var(--secondary);
}

.btn-small {
  padding: 0.3rem 0.8rem;
  font-size: 0.85rem;
}

.btn-icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: var(--glass-hover);
  color: var(--text-primary);
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.btn-delete {
  background: transparent;
  color: var(--text-muted);
  font-size: 1.1rem;
}

.btn-delete:hover {
  color: #fecaca;
}

/* === Inputs === */
.input-field,
.textarea-field,
.select-field {
  width: 100%;
  padding: 0.6rem 1rem;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: rgba(255, 255, 255, 0.9);
  color: var(--text-on-paper);
  font-family: inherit;
  font-size: 1rem;
}

.textarea-field {
  min-height: 10rem;
  resize: vertical;
}

.input-field:focus,
.textarea-field:focus,
.select-field:focus {
  outline: 2px solid var(--accent);
}

.chip {
  padding: 0.3rem 0.9rem;
  border-radius: 999px;
  background: var(--glass);
  color: var(--text-primary);
  border: 1px solid var(--glass-border);
}

.chip.active {
  background: var(--text-primary);
  color: var(--accent);
  font-weight: 600;
}

.emoji-option {
  font-size: 1.6rem;
  background: transparent;
  border-radius: 0.75rem;
  padding: 0.2rem 0.4rem;
  transition: transform var(--transition-fast);
}

.emoji-option.selected {
  background: var(--glass-hover);
  transform: scale(1.2);
}

/* === Loading Screen === */
.loading-screen {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  background: linear-gradient(135deg, #ec4899, #f43f5e, #9333ea);
}

.loading-heart {
  font-size: 4rem;
  animation: pulse 1s ease-in-out infinite;
}

.loading-title {
  font-family: var(--font-display);
  font-size: 2rem;
}

.progress-track {
  width: 16rem;
  height: 0.6rem;
  border-radius: 999px;
  background: var(--glass-hover);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--text-primary);
  transition: width var(--transition-normal);
}

/* === Header === */
.gift-header {
  position: sticky;
  top: 0;
  z-index: 20;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1.5rem;
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(12px);
}

.header-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
}

.header-actions {
  display: flex;
  gap: 0.75rem;
  align-items: center;
}

.theme-btn.spinning {
  animation: spin 0.6s linear;
}

/* === Hero === */
.hero {
  text-align: center;
  padding-top: 3rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 3.5rem;
  text-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
}

.hero-message {
  min-height: 3.5rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin: 1rem auto 2rem;
  max-width: 40rem;
  animation: fade-in var(--transition-slow);
}

.carousel {
  position: relative;
  max-width: 42rem;
  margin: 0 auto;
  border-radius: var(--radius);
  overflow: hidden;
  aspect-ratio: 4 / 3;
  background: var(--glass);
  user-select: none;
}

.carousel-slide {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.carousel-placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  font-size: 5rem;
  background: linear-gradient(135deg, var(--accent), var(--secondary));
}

.carousel-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
  text-align: left;
}

.carousel-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.carousel-nav.prev { left: 1rem; }
.carousel-nav.next { right: 1rem; }

.carousel-controls {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 1rem;
  margin: 1rem 0;
}

/* === Confetti === */
.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 40;
  overflow: hidden;
}

.confetti-piece {
  position: absolute;
  top: -1rem;
  width: 0.6rem;
  height: 1rem;
  border-radius: 2px;
  animation: confetti-fall 3s linear forwards;
}

/* === Surprise === */
.poem-text {
  white-space: pre-line;
  font-style: italic;
  font-size: 1.1rem;
  min-height: 14rem;
  margin: 1rem 0;
}

.album-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.album-tile {
  aspect-ratio: 1;
  border-radius: 1rem;
  background: linear-gradient(135deg, var(--secondary), var(--accent));
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  animation: fade-in var(--transition-slow);
}

.album-tile span {
  font-size: 0.9rem;
  margin-top: 0.5rem;
}

/* === Journal & Diary === */
.entry-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-height: 28rem;
  overflow-y: auto;
}

.entry-item {
  text-align: left;
  padding: 0.75rem 1rem;
  border-radius: 1rem;
  background: var(--glass);
  color: var(--text-primary);
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 0.5rem;
}

.entry-item.active {
  background: var(--text-primary);
  color: var(--accent);
}

.entry-meta {
  font-size: 0.8rem;
  color: inherit;
  opacity: 0.7;
}

.autosave-status {
  font-size: 0.8rem;
  color: var(--text-muted);
}

.diary-page {
  background: #fffbeb;
  color: var(--text-on-paper);
  border-radius: 1rem;
  padding: 1.5rem;
  background-image: repeating-linear-gradient(transparent, transparent 1.9rem, #fde68a 2rem);
}

.tag {
  display: inline-block;
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  background: var(--glass-hover);
  font-size: 0.75rem;
  margin-right: 0.3rem;
}

/* === Moods === */
.mood-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.75rem;
}

.mood-card {
  padding: 1rem 0.5rem;
  border-radius: 1rem;
  background: var(--glass);
  color: var(--text-primary);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.3rem;
  transition: transform var(--transition-fast);
}

.mood-card .emoji {
  font-size: 2rem;
}

.mood-card.selected {
  transform: scale(1.08);
  box-shadow: 0 0 0 3px var(--text-primary);
}

.mood-response {
  margin-top: 1rem;
  text-align: center;
}

.mood-history {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  max-height: 16rem;
  overflow-y: auto;
}

.mood-history-item {
  display: flex;
  gap: 0.75rem;
  align-items: center;
  padding: 0.4rem 0.75rem;
  border-radius: 0.75rem;
  background: var(--glass);
}

/* === Todos === */
.todo-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 1rem;
  background: var(--glass);
}

.todo-item.completed .todo-text {
  text-decoration: line-through;
  opacity: 0.6;
}

.todo-check {
  width: 1.6rem;
  height: 1.6rem;
  border-radius: 50%;
  border: 2px solid var(--text-primary);
  background: transparent;
  color: var(--text-primary);
}

.todo-item.completed .todo-check {
  background: var(--text-primary);
  color: var(--accent);
}

.todo-text {
  flex: 1;
}

.priority-badge {
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  color: var(--text-on-paper);
}

.todo-meta {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Boards (sticky notes, message wall) === */
.board {
  position: relative;
  min-height: 32rem;
  border-radius: var(--radius);
  background: rgba(120, 53, 15, 0.25);
  border: 1px solid var(--glass-border);
  overflow: hidden;
}

.sticky-note,
.wall-message {
  position: absolute;
  padding: 0.75rem;
  color: var(--text-on-paper);
  box-shadow: 0 8px 20px rgba(0, 0, 0, 0.25);
  cursor: grab;
  user-select: none;
}

.sticky-note {
  font-family: 'Comic Sans MS', cursive;
}

.wall-message {
  max-width: 14rem;
  border-radius: 0.75rem;
}

.wall-author {
  font-size: 0.8rem;
  font-weight: 600;
  margin-top: 0.5rem;
}

.note-delete {
  position: absolute;
  top: 0.2rem;
  right: 0.4rem;
  background: transparent;
  color: var(--text-on-paper);
  opacity: 0.5;
}

.note-delete:hover {
  opacity: 1;
}

/* === Photo Shapes === */
.shape-canvas {
  position: relative;
  aspect-ratio: 1;
  max-width: 36rem;
  margin: 0 auto;
  border-radius: var(--radius);
  background: var(--glass);
  overflow: hidden;
}

.shape-photo {
  position: absolute;
  width: 4rem;
  height: 4rem;
  border-radius: 0.5rem;
  object-fit: cover;
  border: 3px solid var(--text-primary);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
  transition: left 1s ease, top 1s ease, transform 1s ease;
}

/* === Games === */
.game-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.4rem;
  text-align: center;
  color: var(--text-primary);
}

.game-card .emoji {
  font-size: 2.5rem;
}

.game-stage {
  margin-top: 1.5rem;
}

.score-board {
  display: flex;
  justify-content: space-between;
  font-weight: 600;
  margin-bottom: 1rem;
}

.memory-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.6rem;
  max-width: 26rem;
  margin: 0 auto;
}

.memory-card {
  aspect-ratio: 1;
  border-radius: 0.75rem;
  font-size: 2rem;
  background: var(--accent);
  color: var(--text-primary);
}

.memory-card.flipped {
  background: var(--text-primary);
}

.memory-card.matched {
  background: #bbf7d0;
  opacity: 0.8;
}

.quiz-answer {
  width: 100%;
  text-align: left;
  padding: 0.75rem 1rem;
  border-radius: 1rem;
  background: var(--glass);
  color: var(--text-primary);
}

.quiz-answer.correct { background: #16a34a; }
.quiz-answer.wrong { background: #dc2626; }

.tap-target {
  display: block;
  width: 10rem;
  height: 10rem;
  margin: 1rem auto;
  border-radius: 50%;
  font-size: 4rem;
  background: var(--accent);
  color: var(--text-primary);
  transition: transform 80ms ease;
}

.tap-target:active {
  transform: scale(0.92);
}

.wish-field {
  position: relative;
  height: 20rem;
  border-radius: var(--radius);
  background: rgba(0, 0, 0, 0.15);
  overflow: hidden;
}

.wish {
  position: absolute;
  padding: 0.3rem 0.7rem;
  border-radius: 999px;
  background: var(--text-primary);
  color: var(--accent);
  font-size: 0.85rem;
  animation: float 3s ease-in-out infinite;
}

/* === Achievements === */
.trophy-btn {
  position: relative;
}

.trophy-count {
  position: absolute;
  top: -0.3rem;
  right: -0.3rem;
  min-width: 1.2rem;
  height: 1.2rem;
  border-radius: 999px;
  background: var(--gold);
  color: var(--text-on-paper);
  font-size: 0.7rem;
  font-weight: 700;
}

.achievement-panel {
  position: fixed;
  top: 4.5rem;
  right: 1rem;
  width: 22rem;
  max-height: 75vh;
  overflow-y: auto;
  z-index: 30;
  background: rgba(17, 24, 39, 0.85);
}

.badge-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.5rem;
  margin-top: 1rem;
}

.badge {
  padding: 0.6rem;
  border-radius: 0.75rem;
  background: var(--glass-hover);
  text-align: center;
  font-size: 0.8rem;
}

.badge .emoji {
  font-size: 1.6rem;
  display: block;
}

.badge.locked {
  filter: grayscale(1);
  opacity: 0.45;
}

.celebration-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
}

.celebration-card {
  background: var(--text-primary);
  color: var(--accent);
  border-radius: var(--radius);
  padding: 2rem 3rem;
  text-align: center;
  animation: pop-in 400ms ease;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
}

.celebration-card .emoji {
  font-size: 4rem;
  display: block;
}

/* === Floating decorations === */
.floating-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
  overflow: hidden;
}

.floating-item {
  position: absolute;
  opacity: 0.6;
  animation: float 6s ease-in-out infinite;
}

.cursor-follower {
  position: fixed;
  pointer-events: none;
  z-index: 60;
  font-size: 1.2rem;
  transform: translate(-50%, -50%);
  transition: left 80ms linear, top 80ms linear;
}

/* === Animations === */
@keyframes fade-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.15); }
}

@keyframes spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-14px); }
}

@keyframes pop-in {
  from { transform: scale(0.6); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

@keyframes confetti-fall {
  to { transform: translateY(110vh) rotate(720deg); }
}
"#;
