//! Binary template codec
//!
//! Fixed schema, little-endian, written in this exact order:
//!
//! 1. body type name (u32 length + UTF-8 bytes)
//! 2. wheel count (u32), then per wheel: name, steerable flag (u32,
//!    0/1), brake flag (u32, 0/1), 4x4 matrix as 16 f32 (the three
//!    basis axes, then translation with a trailing 1.0)
//! 3. weight count (u32), then per weight: name, 16 f32 matrix
//! 4. steering type name (empty string = no steering unit)
//! 5. brake type name (empty string = no brake unit)
//!
//! There is no magic header and no version field; producer and
//! consumer agree on the schema out of band. Decoding is strict: a
//! truncated buffer, a length prefix past the end, a flag word other
//! than 0/1, or trailing bytes all abort with
//! [`TemplateError::Malformed`].

use crate::error::TemplateError;
use crate::template::{VehicleTemplate, WeightRecord, WheelRecord};
use glam::Mat4;

/// Encode a template into its wire form.
pub fn encode(template: &VehicleTemplate) -> Vec<u8> {
    let mut out = Vec::with_capacity(64 + 96 * (template.wheels.len() + template.weights.len()));

    write_string(&mut out, &template.body_type);

    write_u32(&mut out, template.wheels.len() as u32);
    for wheel in &template.wheels {
        write_string(&mut out, &wheel.type_name);
        write_u32(&mut out, wheel.steerable as u32);
        write_u32(&mut out, wheel.has_brake as u32);
        write_mat4(&mut out, wheel.relative);
    }

    write_u32(&mut out, template.weights.len() as u32);
    for weight in &template.weights {
        write_string(&mut out, &weight.type_name);
        write_mat4(&mut out, weight.relative);
    }

    write_string(&mut out, template.steering_type.as_deref().unwrap_or(""));
    write_string(&mut out, template.brake_type.as_deref().unwrap_or(""));

    out
}

/// Decode a template from its wire form.
pub fn decode(bytes: &[u8]) -> Result<VehicleTemplate, TemplateError> {
    let mut reader = Reader::new(bytes);

    let body_type = reader.read_string()?;
    if body_type.is_empty() {
        return Err(TemplateError::Malformed {
            offset: 0,
            what: "empty body type name",
        });
    }

    let wheel_count = reader.read_u32("wheel count")?;
    let mut wheels = Vec::with_capacity(wheel_count.min(64) as usize);
    for _ in 0..wheel_count {
        let type_name = reader.read_string()?;
        let steerable = reader.read_flag()?;
        let has_brake = reader.read_flag()?;
        let relative = reader.read_mat4()?;
        wheels.push(WheelRecord {
            type_name,
            steerable,
            has_brake,
            relative,
        });
    }

    let weight_count = reader.read_u32("weight count")?;
    let mut weights = Vec::with_capacity(weight_count.min(64) as usize);
    for _ in 0..weight_count {
        let type_name = reader.read_string()?;
        let relative = reader.read_mat4()?;
        weights.push(WeightRecord {
            type_name,
            relative,
        });
    }

    let steering_type = reader.read_optional_string()?;
    let brake_type = reader.read_optional_string()?;

    reader.finish()?;

    Ok(VehicleTemplate {
        body_type,
        wheels,
        weights,
        steering_type,
        brake_type,
    })
}

fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn write_string(out: &mut Vec<u8>, value: &str) {
    write_u32(out, value.len() as u32);
    out.extend_from_slice(value.as_bytes());
}

fn write_mat4(out: &mut Vec<u8>, m: Mat4) {
    // The wire stores the three basis axes then translation — for a
    // column-vector matrix that is exactly glam's column order.
    for value in m.to_cols_array() {
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Strict cursor over the wire bytes.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], TemplateError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or(TemplateError::Malformed {
                offset: self.pos,
                what,
            })?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self, what: &'static str) -> Result<u32, TemplateError> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_f32(&mut self) -> Result<f32, TemplateError> {
        let bytes = self.take(4, "matrix element")?;
        Ok(f32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_flag(&mut self) -> Result<bool, TemplateError> {
        let offset = self.pos;
        match self.read_u32("wheel flag")? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(TemplateError::Malformed {
                offset,
                what: "wheel flag out of range",
            }),
        }
    }

    fn read_string(&mut self) -> Result<String, TemplateError> {
        let len = self.read_u32("string length")? as usize;
        let offset = self.pos;
        let bytes = self.take(len, "string bytes")?;
        let s = std::str::from_utf8(bytes).map_err(|_| TemplateError::Malformed {
            offset,
            what: "string is not valid utf-8",
        })?;
        Ok(s.to_string())
    }

    fn read_optional_string(&mut self) -> Result<Option<String>, TemplateError> {
        let s = self.read_string()?;
        Ok((!s.is_empty()).then_some(s))
    }

    fn read_mat4(&mut self) -> Result<Mat4, TemplateError> {
        let mut values = [0.0f32; 16];
        for value in &mut values {
            *value = self.read_f32()?;
        }
        Ok(Mat4::from_cols_array(&values))
    }

    fn finish(&self) -> Result<(), TemplateError> {
        if self.pos != self.buf.len() {
            return Err(TemplateError::Malformed {
                offset: self.pos,
                what: "trailing bytes after template",
            });
        }
        Ok(())
    }
}
