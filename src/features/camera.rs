use crate::convert::format_lens_spec;
use crate::raw::RawTags;
use crate::structs::DisplayValue;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraInfo {
    pub maker: Option<DisplayValue>,
    pub model: Option<DisplayValue>,
    pub lens_maker: Option<DisplayValue>,
    pub lens_model: Option<DisplayValue>,
    pub lens_specification: Option<DisplayValue>,
    pub serial_number: Option<DisplayValue>,
}

impl CameraInfo {
    pub fn rows(&self) -> Vec<(&'static str, Option<&DisplayValue>)> {
        vec![
            ("Maker", self.maker.as_ref()),
            ("Model", self.model.as_ref()),
            ("Lens maker", self.lens_maker.as_ref()),
            ("Lens model", self.lens_model.as_ref()),
            ("Lens specification", self.lens_specification.as_ref()),
            ("Serial number", self.serial_number.as_ref()),
        ]
    }
}

fn scalar(tags: &RawTags, key: &str) -> Option<DisplayValue> {
    tags.scalar(key).and_then(DisplayValue::from_raw)
}

pub fn get_camera_info(tags: &RawTags) -> CameraInfo {
    CameraInfo {
        maker: scalar(tags, "Make"),
        model: scalar(tags, "Model"),
        lens_maker: scalar(tags, "LensMake"),
        lens_model: scalar(tags, "LensModel"),
        lens_specification: tags.value("LensSpecification").and_then(format_lens_spec),
        serial_number: scalar(tags, "SerialNumber")
            .or_else(|| scalar(tags, "InternalSerialNumber")),
    }
}
