use yew::prelude::*;

const FAQ: [(&str, &str); 4] = [
    (
        "How does scoring work?",
        "Each correct answer earns base points plus a bonus for remaining time. Consecutive correct answers add a streak bonus on top.",
    ),
    (
        "What happens if the timer runs out?",
        "An expired clock counts as a wrong answer: no points, and your streak resets.",
    ),
    (
        "Can I change my answer?",
        "You can reselect freely before submitting. Once submitted, the answer is locked.",
    ),
    (
        "How do private rooms work?",
        "Private battles get a shareable room code. Friends with the code join the same lobby.",
    ),
];

/// Static FAQ plus a contact pointer. There is no ticketing backend.
#[function_component(SupportPage)]
pub fn support_page() -> Html {
    let expanded = use_state(|| None::<usize>);

    html! {
        <div class="support-page" data-testid="support-page">
            <div class="screen-heading">
                <h1>{ "Support" }</h1>
                <p class="muted">{ "Answers to common questions about QuizClash battles." }</p>
            </div>
            <section class="card faq-card">
                { for FAQ.iter().enumerate().map(|(index, (question, answer))| {
                    let open = *expanded == Some(index);
                    let toggle = {
                        let expanded = expanded.clone();
                        Callback::from(move |_: MouseEvent| {
                            expanded.set(if open { None } else { Some(index) });
                        })
                    };
                    html! {
                        <div key={index} class="faq-entry">
                            <button class="faq-question" aria-expanded={open.to_string()} onclick={toggle}>
                                { *question }
                                <span>{ if open { "−" } else { "+" } }</span>
                            </button>
                            if open {
                                <p class="faq-answer muted">{ *answer }</p>
                            }
                        </div>
                    }
                }) }
            </section>
            <section class="card contact-card">
                <h2>{ "Still stuck?" }</h2>
                <p class="muted">{ "Reach the team at support@quizclash.example. We answer within a day." }</p>
            </section>
        </div>
    }
}
