//! Profile Form
//!
//! This example drives a four-field profile form through edits, undos
//! and redos, showing how the tracker absorbs the change notifications
//! that applying its own results produces.
//!
//! Run with: RUST_LOG=formstate=debug cargo run --example profile_form

use formstate::record_struct;
use formstate::session::{Form, FormSession, Notify};
use formstate::tracker::HistoryTracker;
use tracing_subscriber::EnvFilter;

record_struct! {
    pub struct Profile {
        name: String = String::new(),
        email: String = String::new(),
        age: u32 = 0,
        subscribed: bool = false,
    }
}

struct ProfileForm {
    values: Profile,
}

impl Form for ProfileForm {
    type Record = Profile;

    fn snapshot(&self) -> Profile {
        self.values.clone()
    }

    fn replace_all(&mut self, record: Profile) -> Notify {
        self.values = record;
        Notify::Changed
    }
}

fn show(label: &str, session: &FormSession<ProfileForm>) {
    let values = &session.form().values;
    println!(
        "{label:<10} name={:?} email={:?} age={} subscribed={}  [undo: {}, redo: {}]",
        values.name,
        values.email,
        values.age,
        values.subscribed,
        session.has_meaningful_undo(),
        session.can_redo()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Profile Form Example ===\n");

    let tracker = HistoryTracker::builder()
        .capacity(20)
        .build()
        .expect("capacity is non-zero");
    let mut session = FormSession::with_tracker(
        ProfileForm {
            values: Profile {
                name: String::new(),
                email: String::new(),
                age: 0,
                subscribed: false,
            },
        },
        tracker,
    );

    session.edit(|form| form.values.name = "Ada".to_string());
    show("edit", &session);
    session.edit(|form| form.values.email = "ada@example.com".to_string());
    show("edit", &session);
    session.edit(|form| {
        form.values.age = 36;
        form.values.subscribed = true;
    });
    show("edit", &session);

    for _ in 0..3 {
        session.undo();
        show("undo", &session);
    }
    for _ in 0..3 {
        session.redo();
        show("redo", &session);
    }

    println!(
        "\nSnapshots recorded: {}",
        session.tracker().history().len()
    );
    println!("\n=== Example Complete ===");
}
