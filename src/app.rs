use crate::config::{load_config, SwipeConfig, DEFAULT_EXIT_DELAY_MS};
use crate::deck::Card;
use crate::gesture::{Point, PointerSample};
use crate::presentation::{
    badge_for, card_transform, counter_label, overlay_opacity, stack_depth, summary_line,
};
use crate::session::{Session, SessionAction, SwipeTicket};
use crate::swipe::Decision;
use gloo_timers::callback::Timeout;
use log::warn;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Default)]
struct SwipeStore {
    session: Option<Session>,
}

enum AppAction {
    Loaded(SwipeConfig),
    Input(SessionAction),
}

impl Reducible for SwipeStore {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AppAction::Loaded(config) => Rc::new(Self {
                session: Some(Session::new(config)),
            }),
            AppAction::Input(input) => {
                let Some(session) = self.session.as_ref() else {
                    return self;
                };
                let mut next = session.clone();
                if next.apply(input) {
                    Rc::new(Self {
                        session: Some(next),
                    })
                } else {
                    self
                }
            }
        }
    }
}

type Store = UseReducerHandle<SwipeStore>;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(SwipeStore::default);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let config = match load_config().await {
                        Ok(config) => config,
                        Err(err) => {
                            warn!("Falling back to default config: {}", err);
                            SwipeConfig::default()
                        }
                    };
                    store.dispatch(AppAction::Loaded(config));
                });
                || ()
            },
            (),
        );
    }

    // The cursor only moves once the exit transition has had time to play.
    // Dropping the timeout on teardown cancels it, so a reset never sees it.
    let pending = store.session.as_ref().and_then(Session::pending_ticket);
    let exit_delay_ms = store
        .session
        .as_ref()
        .map(|session| session.config().exit_delay_ms)
        .unwrap_or(DEFAULT_EXIT_DELAY_MS);
    {
        let store = store.clone();
        use_effect_with_deps(
            move |pending: &Option<SwipeTicket>| {
                let timeout = (*pending).map(|ticket| {
                    Timeout::new(exit_delay_ms, move || {
                        store.dispatch(AppAction::Input(SessionAction::AnimationElapsed(ticket)));
                    })
                });
                move || drop(timeout)
            },
            pending,
        );
    }

    match store.session.as_ref() {
        None => render_loading(),
        Some(session) if session.is_complete() => render_summary(session, &store),
        Some(session) => render_deck(session, &store),
    }
}

fn pointer_callback<E>(store: &Store, action: fn(Point) -> SessionAction) -> Callback<E>
where
    E: PointerSample + 'static,
{
    let store = store.clone();
    Callback::from(move |event: E| {
        if let Some(point) = event.sample() {
            store.dispatch(AppAction::Input(action(point)));
        }
    })
}

fn action_callback<E: 'static>(store: &Store, action: SessionAction) -> Callback<E> {
    let store = store.clone();
    Callback::from(move |_: E| store.dispatch(AppAction::Input(action)))
}

fn render_loading() -> Html {
    html! {
        <div class="screen centered">
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Loading adorable cats..." }</p>
            </div>
        </div>
    }
}

fn render_deck(session: &Session, store: &Store) -> Html {
    let total = session.deck().len();
    let position = session.position();
    let depth = stack_depth(position, total);

    let card_markup = match session.current_card() {
        Some(card) => render_card(card, session, store),
        None => html! {},
    };

    html! {
        <div class="screen">
            <header class="header">
                <h1>{ "Cat Swipe" }</h1>
                <div class="counter">{ counter_label(position, total) }</div>
            </header>

            <main class="card-stack-area">
                <div class="card-stack">
                    { for (0..depth).map(render_stack_layer) }
                    { card_markup }
                </div>
            </main>

            <footer class="actions">
                <button class="action-button pass"
                    disabled={session.is_exhausted()}
                    onclick={action_callback::<MouseEvent>(store, SessionAction::Swipe(Some(Decision::Pass)))}>
                    { "✕" }
                </button>
                <button class="action-button like"
                    onclick={action_callback::<MouseEvent>(store, SessionAction::Swipe(Some(Decision::Like)))}>
                    { "♥" }
                </button>
            </footer>
        </div>
    }
}

fn render_stack_layer(layer: usize) -> Html {
    let class = if layer == 0 {
        "stack-card first"
    } else {
        "stack-card second"
    };
    html! { <div key={layer} class={class}></div> }
}

fn render_card(card: &Card, session: &Session, store: &Store) -> Html {
    let offset = session.offset();
    let style = card_transform(offset, session.committed_decision(), session.is_dragging())
        .to_style();

    let overlay = match badge_for(offset.x) {
        Some(badge) => html! {
            <div class={badge.class()}
                style={format!("opacity: {:.3};", overlay_opacity(offset.x))}>
                <span class="badge">{ badge.label() }</span>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="card"
            style={style}
            onmousedown={pointer_callback::<MouseEvent>(store, SessionAction::PointerDown)}
            onmousemove={pointer_callback::<MouseEvent>(store, SessionAction::PointerMove)}
            onmouseup={action_callback::<MouseEvent>(store, SessionAction::PointerUp)}
            onmouseleave={action_callback::<MouseEvent>(store, SessionAction::PointerUp)}
            ontouchstart={pointer_callback::<TouchEvent>(store, SessionAction::PointerDown)}
            ontouchmove={pointer_callback::<TouchEvent>(store, SessionAction::PointerMove)}
            ontouchend={action_callback::<TouchEvent>(store, SessionAction::PointerUp)}>
            { overlay }
            <img class="card-image"
                src={card.image_url.clone()}
                alt={format!("Cat {}", card.id + 1)}
                draggable="false" />
            <div class="card-caption">
                <h3>{ card.title() }</h3>
                <p>{ "Swipe right to like, left to pass" }</p>
            </div>
        </div>
    }
}

fn render_summary(session: &Session, store: &Store) -> Html {
    let liked = session.liked();

    let favorites = if liked.is_empty() {
        html! {}
    } else {
        html! {
            <div class="favorites">
                <h3>{ "Your Favorites" }</h3>
                <div class="favorites-grid">
                    { for liked.iter().map(render_favorite) }
                </div>
            </div>
        }
    };

    html! {
        <div class="screen centered">
            <div class="summary">
                <h2>{ "All Done!" }</h2>
                <p>{ summary_line(liked.len(), session.deck().len()) }</p>
                { favorites }
                <button class="reset-button"
                    onclick={action_callback::<MouseEvent>(store, SessionAction::Reset)}>
                    { "Swipe More Cats" }
                </button>
            </div>
        </div>
    }
}

fn render_favorite(card: &Card) -> Html {
    html! {
        <img key={card.id}
            class="favorite"
            src={card.image_url.clone()}
            alt={format!("Liked cat {}", card.id)} />
    }
}
