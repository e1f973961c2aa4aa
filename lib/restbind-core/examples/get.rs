#![allow(dead_code)]

use http::uri::Scheme;
use restbind_core::{Contract, Invocation, MethodDef, ParamDef, RestClient};
use serde::Deserialize;
use tracing::info;

/// The dog.ceo breed API.
struct DogCeo;

impl Contract for DogCeo {
    const NAME: &'static str = "DogCeo";

    fn methods() -> Vec<MethodDef> {
        vec![
            MethodDef::new("list_breeds").get().route("/breeds/list"),
            MethodDef::new("breed_images")
                .get()
                .route("/breed/{breed}/images")
                .param(ParamDef::route("breed")),
        ]
    }
}

impl DogCeo {
    fn list_breeds() -> Invocation<Self, BreedsList> {
        Invocation::new("list_breeds")
    }

    fn breed_images(breed: &str) -> Invocation<Self, BreedImages> {
        Invocation::new("breed_images").arg(breed)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let client = RestClient::<DogCeo>::builder()
        .with_scheme(Scheme::HTTP)
        .with_host("dog.ceo")
        .with_base_path("/api")?
        .build()?;

    // GET http://dog.ceo:80/api/breeds/list
    let breeds = client.call(DogCeo::list_breeds()).await?;
    info!(?breeds, "breeds");

    // GET http://dog.ceo:80/api/breed/hound/images
    let images = client.call(DogCeo::breed_images("hound")).await?;
    info!(?images, "hound images");

    Ok(())
}

type BreedsList = DogCeoResult<Vec<String>>;

type BreedImages = DogCeoResult<Vec<String>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum DogCeoResult<T> {
    Success { message: T },
    Error { code: u16, message: String },
}
