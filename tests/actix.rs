use actix_web::{http::header::ACCEPT_LANGUAGE, test, web, App, HttpResponse};
use message_key::actix::AcceptLang;
use message_key::{args, Catalog, Lang, MessageKey};

fn catalog() -> Catalog {
    let en: Lang = "en".parse().unwrap();
    let fr: Lang = "fr".parse().unwrap();
    let mut catalog = Catalog::new(en.clone());
    catalog.insert(en, "welcome.title", "Welcome, {0}!");
    catalog.insert(fr, "welcome.title", "Bienvenue, {0} !");
    catalog
}

async fn welcome(
    catalog: web::Data<Catalog>,
    accept: AcceptLang,
    name: web::Path<String>,
) -> HttpResponse {
    let key = match MessageKey::new("welcome.title") {
        Ok(key) => key,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    let args = args![name.into_inner()];
    let text = match accept.negotiate(catalog.langs()) {
        Some(lang) => key.resolve_with_locale(&catalog, &lang, &args),
        None => key.resolve(&catalog, &args),
    };
    match text {
        Ok(text) => HttpResponse::Ok().body(text),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

#[actix_web::test]
async fn test_welcome() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(catalog()))
            .route("/welcome/{name}", web::get().to(welcome)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/welcome/Alice")
        .insert_header((ACCEPT_LANGUAGE, "fr-CH, fr;q=0.9, en;q=0.8"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Bienvenue, Alice !");

    let req = test::TestRequest::get()
        .uri("/welcome/Alice")
        .insert_header((ACCEPT_LANGUAGE, "fr-CH, en"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Bienvenue, Alice !");

    let req = test::TestRequest::get().uri("/welcome/Alice").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Welcome, Alice!");

    let req = test::TestRequest::get()
        .uri("/welcome/Bob")
        .insert_header((ACCEPT_LANGUAGE, "ja, de;q=0.5"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Welcome, Bob!");
}
