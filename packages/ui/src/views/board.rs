//! Drag-and-drop team board.
//!
//! People cards are HTML5-draggable. Each project column and the team row are
//! drop targets; dropping on the team row unassigns. The id of the card being
//! dragged is kept in a signal, so nothing is read back from the browser's
//! `dataTransfer`.

use dioxus::prelude::*;
use store::{Board, Person};

use crate::components::Avatar;
use crate::notifications::{notify, use_notifications, ToastKind};

/// Where a card was dropped.
#[derive(Clone, Debug, PartialEq)]
enum DropTarget {
    Team,
    Column(String),
}

#[component]
pub fn BoardView() -> Element {
    let mut board = use_signal(Board::demo);
    let mut dragging = use_signal(|| Option::<String>::None);
    let mut over = use_signal(|| Option::<DropTarget>::None);
    let mut notifications = use_notifications();

    let mut drop_on = move |target: DropTarget| {
        over.set(None);
        let Some(person_id) = dragging.write().take() else {
            return;
        };
        let column = match &target {
            DropTarget::Team => None,
            DropTarget::Column(id) => Some(id.as_str()),
        };
        let result = board.write().move_person(&person_id, column);
        if let Err(e) = result {
            notify(&mut notifications, ToastKind::Destructive, "Move failed", Some(&e.to_string()));
        }
    };

    let snapshot = board.read().clone();
    let unassigned: Vec<Person> = snapshot.unassigned().into_iter().cloned().collect();
    let team_class = if over() == Some(DropTarget::Team) { "team-row drop-over" } else { "team-row" };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Drag and Drop" }
            p { class: "page-subtitle", "Drag team members into projects. Drop them back on the team to unassign." }

            section {
                class: "{team_class}",
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    over.set(Some(DropTarget::Team));
                },
                ondragleave: move |_| over.set(None),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    drop_on(DropTarget::Team);
                },
                h2 { class: "board-heading", "Team Members" }
                div {
                    class: "team-cards",
                    if unassigned.is_empty() {
                        p { class: "board-empty", "Everyone is assigned." }
                    }
                    for person in unassigned {
                        PersonCard {
                            key: "{person.id}",
                            person: person.clone(),
                            on_drag_start: move |id: String| dragging.set(Some(id)),
                            on_drag_end: move |_: ()| over.set(None),
                        }
                    }
                }
            }

            div {
                class: "columns",
                for column in snapshot.columns().iter().cloned() {
                    section {
                        key: "{column.id}",
                        class: if over() == Some(DropTarget::Column(column.id.clone())) { "column drop-over" } else { "column" },
                        ondragover: {
                            let id = column.id.clone();
                            move |evt: DragEvent| {
                                evt.prevent_default();
                                over.set(Some(DropTarget::Column(id.clone())));
                            }
                        },
                        ondrop: {
                            let id = column.id.clone();
                            move |evt: DragEvent| {
                                evt.prevent_default();
                                drop_on(DropTarget::Column(id.clone()));
                            }
                        },
                        h2 { class: "board-heading", "{column.title}" }
                        if column.items.is_empty() {
                            p { class: "board-empty", "Drop people here" }
                        }
                        for person in snapshot.people_in(&column.id).into_iter().cloned() {
                            PersonCard {
                                key: "{person.id}",
                                person: person.clone(),
                                on_drag_start: move |id: String| dragging.set(Some(id)),
                                on_drag_end: move |_: ()| over.set(None),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PersonCard(
    person: Person,
    on_drag_start: EventHandler<String>,
    on_drag_end: EventHandler<()>,
) -> Element {
    let id = person.id.clone();

    rsx! {
        div {
            class: "person-card",
            draggable: "true",
            ondragstart: move |_| on_drag_start.call(id.clone()),
            ondragend: move |_| on_drag_end.call(()),
            Avatar {
                src: person.avatar.clone(),
                alt: person.name.clone(),
                initials: person.initials(),
                class: "avatar-small",
            }
            div {
                class: "person-text",
                span { class: "person-name", "{person.name}" }
                span { class: "person-role", "{person.role}" }
            }
        }
    }
}
