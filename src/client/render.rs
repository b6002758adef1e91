use crate::{about::AboutProfile, include_res};

use super::ViewState;

/// Pure function of view state; the templates live under res/pages/about.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => include_res!(str, "/pages/about/loading.html").to_owned(),
        ViewState::Failed(error) => {
            include_res!(str, "/pages/about/error.html").replace("{error}", error)
        }
        ViewState::Loaded(profile) => profile_html(profile),
    }
}

fn profile_html(profile: &AboutProfile) -> String {
    let mut bio = String::new();
    for paragraph in &profile.bio {
        bio += &include_res!(str, "/pages/about/bio_paragraph.html")
            .replace("{paragraph}", paragraph);
    }

    let mut interests = String::new();
    for interest in &profile.interests {
        interests += &include_res!(str, "/pages/about/interest.html")
            .replace("{interest}", interest);
    }

    let mut games = String::new();
    for game in &profile.currently_playing {
        games += &include_res!(str, "/pages/about/game_tag.html").replace("{game}", game);
    }

    include_res!(str, "/pages/about/profile.html")
        .replace("{name}", &profile.name)
        .replace("{location}", &profile.location)
        .replace("{education}", &profile.education)
        .replace("{image_url}", &profile.image_url)
        .replace("{bio}", &bio)
        .replace("{interests}", &interests)
        .replace("{currently_playing}", &games)
}
