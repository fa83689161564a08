use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::hub3::{Hub3Encoder, Hub3Error, PaymentSlip};

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum RenderError {
    #[error("Barcode renderer failed: {0}")]
    Failed(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum PaymentBarcodeError {
    #[error(transparent)]
    Encode(#[from] Hub3Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Turns a HUB-3 payload into a PDF417 image.
pub trait BarcodeRenderer: Send + Sync {
    fn render(&self, payload: &str) -> Result<Vec<u8>, RenderError>;

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBarcode {
    pub payload: String,
    pub image: Vec<u8>,
    pub mime_type: &'static str,
}

impl RenderedBarcode {
    pub fn to_data_url(&self) -> String {
        to_data_url(self.mime_type, &self.image)
    }
}

/// `data:<mime>;base64,<padded standard base64>`
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

pub struct PaymentBarcode<R> {
    renderer: R,
    encoder: Hub3Encoder,
}

impl<R: BarcodeRenderer> PaymentBarcode<R> {
    pub fn new(renderer: R, encoder: Hub3Encoder) -> Self {
        PaymentBarcode { renderer, encoder }
    }

    pub fn render(&self, slip: &PaymentSlip) -> Result<RenderedBarcode, PaymentBarcodeError> {
        let payload = self.encoder.encode(slip)?;
        let image = self.renderer.render(&payload)?;
        Ok(RenderedBarcode {
            payload,
            image,
            mime_type: self.renderer.mime_type(),
        })
    }
}
