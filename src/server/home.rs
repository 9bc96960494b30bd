//! Static landing page served at `/`.

use axum::response::Html;

const HOME_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Chromax</title>
  <style>
    * { background-color: gray; }
    .icon { width: 300px; display: block; margin: auto; margin-top: 50px; margin-bottom: 10px; background-color: black; border-radius: 30%; padding: 12px; }
    .contentContainer { color: white; padding: 12px; text-align: center; }
    .learn_btn { border-radius: 20%; padding: 20px; background: lightblue; }
  </style>
</head>
<body>
  <img src="https://render.com/icon.svg" class="icon" alt="">
  <div class="contentContainer">
    <h1>Chromax</h1>
    <p>Unlock a world of new wonders by using the Chromax Music API. Learn more using the developer documentation.</p>
    <button class="learn_btn" onclick='window.location.href="https://chromax-api.onrender.com"'>Learn Chromax</button>
  </div>
</body>
</html>
"#;

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
