use actix_web::web;

pub mod auth;
pub mod benefits;
pub mod checkin;
pub mod competitions;
pub mod dashboard;
pub mod matches;
pub mod member;
pub mod news;
pub mod players;
pub mod status;
pub mod tickets;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Unversioned catalog surface
    cfg.service(status::read_root)
        .service(status::get_status)
        .service(players::create_player)
        .service(players::read_players)
        .service(players::read_player)
        .service(competitions::create_competition)
        .service(competitions::read_competitions)
        .service(competitions::read_competition)
        .service(matches::create_match)
        .service(matches::read_matches)
        .service(matches::read_match)
        .service(matches::get_games_schedule)
        .service(matches::get_home_games);

    // Versioned member surface
    cfg.service(
        web::scope("/api/v1")
            .service(auth::login)
            .service(member::get_profile)
            .service(member::list_cards)
            .service(member::add_card)
            .service(member::delete_card)
            .service(dashboard::get_dashboard)
            .service(news::get_news_detail)
            .service(news::toggle_like)
            .service(tickets::list_sales)
            .service(tickets::purchase)
            .service(checkin::check_in)
            .service(benefits::list_benefits)
            .service(benefits::get_benefit_detail),
    );
}
