//! Synthetic in-memory raster construction: wraps a subdataset's decoded
//! pixels in a MEM dataset carrying corrected georeferencing and the full
//! set of source tags, scales, offsets, and band descriptions.
use gdal::raster::{GdalDataType, GdalType, RasterBand};
use gdal::{Dataset, DriverManager, Metadata};

use crate::error::{Error, Result};
use crate::io::georef::Georeference;

/// Build an in-memory copy of `src` with `georef` stamped on, ready to be
/// handed to the conversion driver in place of the original handle.
///
/// Dimensions, band count, and datatype match the source exactly; nodata,
/// tags, scale/offset, color interpretation, and descriptions are copied
/// band-for-band in source order.
pub fn synthesize(src: &Dataset, georef: &Georeference) -> Result<Dataset> {
    let (cols, rows) = src.raster_size();
    let bands = src.raster_count();
    let dtype = src.rasterband(1)?.band_type();

    let driver = DriverManager::get_driver_by_name("MEM")?;
    let mut mem = match dtype {
        GdalDataType::UInt8 => driver.create_with_band_type::<u8, _>("", cols, rows, bands)?,
        GdalDataType::UInt16 => driver.create_with_band_type::<u16, _>("", cols, rows, bands)?,
        GdalDataType::Int16 => driver.create_with_band_type::<i16, _>("", cols, rows, bands)?,
        GdalDataType::UInt32 => driver.create_with_band_type::<u32, _>("", cols, rows, bands)?,
        GdalDataType::Int32 => driver.create_with_band_type::<i32, _>("", cols, rows, bands)?,
        GdalDataType::Float32 => driver.create_with_band_type::<f32, _>("", cols, rows, bands)?,
        GdalDataType::Float64 => driver.create_with_band_type::<f64, _>("", cols, rows, bands)?,
        other => return Err(Error::UnsupportedDataType(format!("{other:?}"))),
    };

    mem.set_spatial_ref(&georef.crs)?;
    mem.set_geo_transform(&georef.transform)?;

    if let Some(entries) = src.metadata_domain("") {
        for entry in entries {
            if let Some((key, value)) = entry.split_once('=') {
                mem.set_metadata_item(key, value, "")?;
            }
        }
    }

    for index in 1..=bands {
        let src_band = src.rasterband(index)?;
        let mut dst_band = mem.rasterband(index)?;

        copy_band_pixels(&src_band, &mut dst_band, (cols, rows), dtype)?;

        if let Some(nodata) = src_band.no_data_value() {
            dst_band.set_no_data_value(Some(nodata))?;
        }
        if let Some(scale) = src_band.scale() {
            dst_band.set_scale(scale)?;
        }
        if let Some(offset) = src_band.offset() {
            dst_band.set_offset(offset)?;
        }
        dst_band.set_color_interpretation(src_band.color_interpretation())?;

        if let Ok(description) = src_band.description() {
            if !description.is_empty() {
                dst_band.set_description(&description)?;
            }
        }
        if let Some(entries) = src_band.metadata_domain("") {
            for entry in entries {
                if let Some((key, value)) = entry.split_once('=') {
                    dst_band.set_metadata_item(key, value, "")?;
                }
            }
        }
    }

    Ok(mem)
}

fn copy_band_pixels(
    src: &RasterBand,
    dst: &mut RasterBand,
    size: (usize, usize),
    dtype: GdalDataType,
) -> Result<()> {
    match dtype {
        GdalDataType::UInt8 => copy_typed::<u8>(src, dst, size),
        GdalDataType::UInt16 => copy_typed::<u16>(src, dst, size),
        GdalDataType::Int16 => copy_typed::<i16>(src, dst, size),
        GdalDataType::UInt32 => copy_typed::<u32>(src, dst, size),
        GdalDataType::Int32 => copy_typed::<i32>(src, dst, size),
        GdalDataType::Float32 => copy_typed::<f32>(src, dst, size),
        GdalDataType::Float64 => copy_typed::<f64>(src, dst, size),
        other => Err(Error::UnsupportedDataType(format!("{other:?}"))),
    }
}

fn copy_typed<T: GdalType + Copy>(
    src: &RasterBand,
    dst: &mut RasterBand,
    size: (usize, usize),
) -> Result<()> {
    let mut buffer = src.read_as::<T>((0, 0), size, size, None)?;
    dst.write((0, 0), size, &mut buffer)?;
    Ok(())
}
