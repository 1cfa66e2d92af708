use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::quiz::{OptionMark, QuizAction, QuizPhase, QuizSession};

fn option_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Correct => "quiz-option correct",
        OptionMark::Incorrect => "quiz-option incorrect",
        OptionMark::Selected => "quiz-option selected",
        OptionMark::Neutral => "quiz-option",
    }
}

#[function_component(QuizPage)]
pub fn quiz_page() -> Html {
    let session = use_reducer(QuizSession::default);

    let on_check = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(QuizAction::Check))
    };
    let on_advance = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(QuizAction::Advance))
    };
    let on_reset = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(QuizAction::Reset))
    };

    let body = if session.phase() == QuizPhase::Completed {
        html! {
            <div class="quiz-card quiz-results">
                <h2>{"Quiz Completed!"}</h2>
                <div class="quiz-score-badge">
                    {format!("{}/{}", session.score(), session.total_questions())}
                </div>
                <h3>{session.verdict().message()}</h3>
                <p class="quiz-muted">
                    {"Thank you for taking the quiz and learning more about coral reefs and their importance to our oceans."}
                </p>
                <div class="quiz-actions">
                    <button class="quiz-button outline" onclick={on_reset}>
                        {"↺ Take Quiz Again"}
                    </button>
                    <Link<Route> to={Route::Gallery} classes="quiz-button">
                        {"Explore 3D Gallery"}
                    </Link<Route>>
                </div>
            </div>
        }
    } else {
        let question = session.current_question();
        let answered = session.phase() == QuizPhase::Checked;
        html! {
            <div class="quiz-card" key={session.index()}>
                <div class="quiz-header">
                    <div>
                        <h2>{format!("Question {} of {}", session.question_number(), session.total_questions())}</h2>
                        <p class="quiz-muted">{format!("Score: {} / {}", session.score(), session.total_questions())}</p>
                    </div>
                    <div
                        class="quiz-progress"
                        role="progressbar"
                        aria-label={format!("{} of {} questions answered", session.questions_answered(), session.total_questions())}
                    >
                        <div class="quiz-progress-fill" style={format!("width: {}%;", session.progress_percent())}></div>
                    </div>
                </div>

                <h3 class="quiz-question">{question.question}</h3>
                <div class="quiz-options" role="radiogroup">
                    { for question.options.iter().map(|option| {
                        let label = option.label;
                        let mark = session.mark_for(label);
                        let onclick = {
                            let session = session.clone();
                            Callback::from(move |_: MouseEvent| session.dispatch(QuizAction::Select(label)))
                        };
                        let input_id = format!("option-{}", label);
                        html! {
                            <div class={option_class(mark)} {onclick}>
                                <input
                                    type="radio"
                                    id={input_id.clone()}
                                    name="quiz-option"
                                    checked={session.selected() == Some(label)}
                                    disabled={answered}
                                />
                                <label for={input_id}>{option.text}</label>
                                {
                                    match mark {
                                        OptionMark::Correct => html! { <span class="quiz-icon correct">{"✔"}</span> },
                                        OptionMark::Incorrect => html! { <span class="quiz-icon incorrect">{"✘"}</span> },
                                        _ => html! {},
                                    }
                                }
                            </div>
                        }
                    }) }
                </div>

                {
                    if answered {
                        html! { <div class="quiz-explanation"><p>{question.explanation}</p></div> }
                    } else {
                        html! {}
                    }
                }

                <div class="quiz-footer">
                    {
                        if answered {
                            html! {
                                <button class="quiz-button" onclick={on_advance}>
                                    {session.advance_label()}
                                    { if session.is_last_question() { "" } else { " →" } }
                                </button>
                            }
                        } else {
                            html! {
                                <button class="quiz-button" onclick={on_check} disabled={session.selected().is_none()}>
                                    {"Check Answer"}
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        }
    };

    html! {
        <main class="page quiz-page">
            <div class="page-intro">
                <h1>{"Coral Reef Quiz"}</h1>
                <p>{"Test your knowledge about coral reefs and marine conservation!"}</p>
            </div>
            {body}
            <style>
                {r#"
                .quiz-page {
                    max-width: 768px;
                    margin: 0 auto;
                }
                .quiz-card {
                    border: 1px solid #1f2937;
                    border-radius: 8px;
                    background: #111827;
                    padding: 1.5rem;
                }
                .quiz-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .quiz-header h2 {
                    font-size: 1.25rem;
                    margin: 0;
                }
                .quiz-muted {
                    color: #9ca3af;
                }
                .quiz-progress {
                    width: 96px;
                    height: 8px;
                    border-radius: 4px;
                    background: #374151;
                    overflow: hidden;
                }
                .quiz-progress-fill {
                    height: 100%;
                    background: #22c55e;
                    transition: width 0.3s ease;
                }
                .quiz-question {
                    font-size: 1.25rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .quiz-options {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .quiz-option {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: 1px solid #374151;
                    border-radius: 6px;
                    padding: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s, border-color 0.2s;
                }
                .quiz-option:hover {
                    border-color: #4b5563;
                    background: #1f2937;
                }
                .quiz-option label {
                    flex: 1;
                    cursor: pointer;
                }
                .quiz-option.selected {
                    border-color: #14b8a6;
                    background: rgba(19, 78, 74, 0.2);
                }
                .quiz-option.correct {
                    border-color: #22c55e;
                    background: rgba(34, 197, 94, 0.1);
                }
                .quiz-option.incorrect {
                    border-color: #ef4444;
                    background: rgba(239, 68, 68, 0.1);
                }
                .quiz-icon.correct { color: #22c55e; }
                .quiz-icon.incorrect { color: #ef4444; }
                .quiz-explanation {
                    border-radius: 6px;
                    background: rgba(19, 78, 74, 0.3);
                    color: #99f6e4;
                    padding: 1rem;
                    animation: quizReveal 0.3s ease-out;
                }
                @keyframes quizReveal {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .quiz-footer {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                }
                .quiz-button {
                    display: inline-block;
                    background: #0d9488;
                    color: #fff;
                    border: 1px solid #0d9488;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    text-decoration: none;
                }
                .quiz-button:hover { background: #0f766e; }
                .quiz-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .quiz-button.outline {
                    background: transparent;
                    color: #2dd4bf;
                }
                .quiz-results {
                    text-align: center;
                }
                .quiz-score-badge {
                    width: 96px;
                    height: 96px;
                    margin: 1.5rem auto;
                    border-radius: 50%;
                    background: rgba(13, 148, 136, 0.2);
                    color: #2dd4bf;
                    font-size: 2.25rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .quiz-actions {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                    flex-wrap: wrap;
                }
                "#}
            </style>
        </main>
    }
}
