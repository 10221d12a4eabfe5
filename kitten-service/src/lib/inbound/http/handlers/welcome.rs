use axum::response::Html;

pub async fn welcome() -> Html<&'static str> {
    Html(
        "<h1>Welcome to Cyber Kittens!</h1>\
         <p>Cats live at <code>/kittens/:id</code></p>\
         <p>Create one with <b><code>POST /kittens</code></b> and delete one with \
         <b><code>DELETE /kittens/:id</code></b></p>\
         <p>Log in via <code>POST /login</code> or register via <code>POST /register</code></p>",
    )
}
